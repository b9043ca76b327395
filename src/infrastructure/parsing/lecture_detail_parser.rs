//! Lecture watch page parser

use super::config::LectureDetailSelectors;
use super::video_id::VideoIdExtractor;
use super::{compile_selector, ContextualParser, Document, ParseContext};
use crate::infrastructure::scrape_error::ScrapeResult;
use scraper::Selector;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fields read from a lecture page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LectureDetail {
    pub name: String,
    pub youtube_id: Option<String>,
}

pub struct LectureDetailParser {
    title_selector: Selector,
    video_ids: Arc<VideoIdExtractor>,
}

impl LectureDetailParser {
    pub fn with_config(
        selectors: &LectureDetailSelectors,
        video_ids: Arc<VideoIdExtractor>,
    ) -> ScrapeResult<Self> {
        Ok(Self {
            title_selector: compile_selector(&selectors.title)?,
            video_ids,
        })
    }
}

impl ContextualParser for LectureDetailParser {
    type Output = LectureDetail;
    type Context = ParseContext;

    /// The video id comes from the page URL when it carries one, and from
    /// the embedded player otherwise.
    fn parse_with_context(
        &self,
        document: &Document,
        context: &Self::Context,
    ) -> ScrapeResult<Self::Output> {
        let name = document
            .find_first(&self.title_selector)
            .map(|title| title.text())
            .unwrap_or_else(|| {
                warn!("Lecture title not found on {}", context.page_url);
                String::new()
            });

        let youtube_id = self
            .video_ids
            .from_url(&context.page_url)
            .or_else(|| self.video_ids.from_page(document));

        debug!("Lecture '{}' has video id {:?}", name, youtube_id);
        Ok(LectureDetail { name, youtube_id })
    }
}
