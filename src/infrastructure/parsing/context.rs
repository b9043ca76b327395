//! Parsing context for HTML extraction

use crate::infrastructure::url_resolver::UrlResolver;

/// Context information for parsing a fetched page
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// URL the page was fetched from
    pub page_url: String,

    /// Resolver for turning hrefs into absolute URLs
    pub resolver: UrlResolver,
}

impl ParseContext {
    pub const fn new(page_url: String, resolver: UrlResolver) -> Self {
        Self { page_url, resolver }
    }
}

/// Context for lecture list extraction
#[derive(Debug, Clone, Default)]
pub struct LectureListContext {
    /// When set, lectures whose name *contains* this string are dropped
    pub course_name: Option<String>,
}

impl LectureListContext {
    pub fn excluding(course_name: &str) -> Self {
        Self {
            course_name: Some(course_name.to_string()),
        }
    }
}
