//! Course page heading parser

use super::config::CoursePageSelectors;
use super::{compile_selector, ContextualParser, Document, ParseContext};
use crate::infrastructure::scrape_error::ScrapeResult;
use scraper::Selector;
use tracing::warn;

pub struct CoursePageParser {
    name_selector: Selector,
}

impl CoursePageParser {
    pub fn with_config(selectors: &CoursePageSelectors) -> ScrapeResult<Self> {
        Ok(Self {
            name_selector: compile_selector(&selectors.name)?,
        })
    }

    /// Course name shown in the page navigation bar
    pub fn course_name(&self, document: &Document) -> Option<String> {
        document
            .find_first(&self.name_selector)
            .and_then(|heading| heading.non_empty_text())
    }
}

impl ContextualParser for CoursePageParser {
    type Output = Option<String>;
    type Context = ParseContext;

    fn parse_with_context(
        &self,
        document: &Document,
        context: &Self::Context,
    ) -> ScrapeResult<Self::Output> {
        let name = self.course_name(document);
        if name.is_none() {
            warn!("Course name not found on {}", context.page_url);
        }
        Ok(name)
    }
}
