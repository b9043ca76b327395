//! Course preview parser for subject listing pages
//!
//! Each listing page carries a set of `course-preview` items plus
//! `page-numbers` links to the remaining pages of the same listing.

use super::config::CourseSelectors;
use super::lecture_parser::LectureParser;
use super::{compile_selector, ContextualParser, Document, ParseContext};
use crate::domain::Course;
use crate::infrastructure::scrape_error::ScrapeResult;
use scraper::Selector;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

pub struct CourseListParser {
    preview_selector: Selector,
    article_selector: Selector,
    name_selector: Selector,
    pagination_selector: Selector,
    lecture_parser: Arc<LectureParser>,
}

impl CourseListParser {
    pub fn with_config(
        selectors: &CourseSelectors,
        lecture_parser: Arc<LectureParser>,
    ) -> ScrapeResult<Self> {
        Ok(Self {
            preview_selector: compile_selector(&selectors.preview)?,
            article_selector: compile_selector(&selectors.article)?,
            name_selector: compile_selector(&selectors.name)?,
            pagination_selector: compile_selector(&selectors.pagination)?,
            lecture_parser,
        })
    }

    /// Absolute URLs of the other pages of this listing, in link order.
    ///
    /// Links back to the current page and repeated links (e.g. "next"
    /// pointing at a numbered page) are dropped.
    pub fn pagination_urls(&self, document: &Document, context: &ParseContext) -> Vec<String> {
        let mut seen = HashSet::from([context.page_url.clone()]);

        document
            .find_all(&self.pagination_selector)
            .iter()
            .filter_map(|link| link.attr("href"))
            .map(|href| context.resolver.resolve_against(&context.page_url, href))
            .filter(|url| seen.insert(url.clone()))
            .collect()
    }
}

impl ContextualParser for CourseListParser {
    type Output = Vec<Course>;
    type Context = ParseContext;

    /// Courses on one listing page. A course's `url` is the listing page
    /// it was found on.
    fn parse_with_context(
        &self,
        document: &Document,
        context: &Self::Context,
    ) -> ScrapeResult<Self::Output> {
        let courses: Vec<Course> = document
            .find_all(&self.preview_selector)
            .iter()
            .filter(|preview| preview.contains(&self.article_selector))
            .map(|preview| Course {
                name: preview
                    .find_first(&self.name_selector)
                    .map(|node| node.text())
                    .unwrap_or_default(),
                url: context.page_url.clone(),
                lectures: self.lecture_parser.lectures_from_preview(preview),
            })
            .collect();

        debug!("Found {} course previews on {}", courses.len(), context.page_url);
        Ok(courses)
    }
}
