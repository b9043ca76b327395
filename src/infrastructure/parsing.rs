//! HTML parsing infrastructure for catalog pages
//!
//! Every extractor is driven by a [`SelectorMap`]; page markup assumptions
//! live there and nowhere else.

pub mod config;
pub mod context;
pub mod course_list_parser;
pub mod course_page_parser;
pub mod document;
pub mod lecture_detail_parser;
pub mod lecture_parser;
pub mod subject_parser;
pub mod video_id;

// Re-export public types
pub use config::SelectorMap;
pub use context::{LectureListContext, ParseContext};
pub use course_list_parser::CourseListParser;
pub use course_page_parser::CoursePageParser;
pub use document::{Document, Node};
pub use lecture_detail_parser::{LectureDetail, LectureDetailParser};
pub use lecture_parser::LectureParser;
pub use subject_parser::{SubjectDetailParser, SubjectListParser, SubjectPage};
pub use video_id::VideoIdExtractor;

use crate::infrastructure::scrape_error::{ScrapeError, ScrapeResult};
use scraper::Selector;

/// Parser trait with context support
pub trait ContextualParser {
    type Output;
    type Context;

    /// Parse a document with contextual information
    fn parse_with_context(
        &self,
        document: &Document,
        context: &Self::Context,
    ) -> ScrapeResult<Self::Output>;
}

/// Compile a selector string from the selector map
pub fn compile_selector(selector: &str) -> ScrapeResult<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::invalid_selector(selector, e.to_string()))
}
