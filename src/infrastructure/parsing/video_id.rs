//! YouTube video id extraction
//!
//! Two strategies, chosen by the caller based on what it has at hand:
//! the lecture URL, or an already fetched lecture page.

use super::config::PlayerSelectors;
use super::{compile_selector, Document};
use crate::infrastructure::scrape_error::{ScrapeError, ScrapeResult};
use regex::Regex;
use scraper::Selector;
use tracing::debug;

pub struct VideoIdExtractor {
    embed_selector: Selector,
    src_attribute: String,
    src_pattern: Regex,
    url_marker: String,
}

impl VideoIdExtractor {
    pub fn new() -> ScrapeResult<Self> {
        Self::with_config(&PlayerSelectors::default())
    }

    pub fn with_config(selectors: &PlayerSelectors) -> ScrapeResult<Self> {
        let src_pattern =
            Regex::new(&selectors.src_pattern).map_err(|e| ScrapeError::Configuration {
                message: format!("Invalid player src pattern '{}': {e}", selectors.src_pattern),
            })?;

        if selectors.url_marker.is_empty() {
            return Err(ScrapeError::Configuration {
                message: "player.url_marker must not be empty".to_string(),
            });
        }

        Ok(Self {
            embed_selector: compile_selector(&selectors.embed)?,
            src_attribute: selectors.src_attribute.clone(),
            src_pattern,
            url_marker: selectors.url_marker.clone(),
        })
    }

    /// Everything after the first `v=` marker, up to the next one if any.
    ///
    /// No further truncation happens: `watch?v=abc123&t=5` yields
    /// `abc123&t=5`.
    pub fn from_url(&self, lecture_url: &str) -> Option<String> {
        lecture_url
            .split(self.url_marker.as_str())
            .nth(1)
            .map(ToString::to_string)
    }

    /// Capture group of the player pattern matched against the embedded
    /// player's `src`
    pub fn from_page(&self, document: &Document) -> Option<String> {
        let player = document.find_first(&self.embed_selector)?;
        let src = player.attr(&self.src_attribute)?;

        let id = self
            .src_pattern
            .captures(src)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        if id.is_none() {
            debug!("Player src did not match video pattern: {}", src);
        }
        id
    }
}
