//! Domain layer
//!
//! Plain value records produced by the catalog scraper.

pub mod catalog;

pub use catalog::{Course, CourseMetadata, Lecture, LectureMetadata, Subject, SubjectStub};
