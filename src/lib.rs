//! Lecture Catalog Scraper
//!
//! Extracts subjects, courses, lectures, instructors and video ids from the
//! pages of an online lecture catalog and returns them as plain,
//! serializable records.
//!
//! ```no_run
//! use lecture_catalog_scraper::CatalogScraper;
//!
//! # async fn run() -> lecture_catalog_scraper::ScrapeResult<()> {
//! let scraper = CatalogScraper::with_defaults()?;
//! for subject in scraper.list_subjects().await? {
//!     let subject = scraper.get_subject_metadata(&subject.url).await?;
//!     println!("{}: {} courses", subject.name, subject.courses.len());
//! }
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::CatalogScraper;
pub use domain::{Course, CourseMetadata, Lecture, LectureMetadata, Subject, SubjectStub};
pub use infrastructure::{ScrapeError, ScrapeResult, ScraperConfig, SelectorMap};
