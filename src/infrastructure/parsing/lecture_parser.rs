//! Lecture entry extraction
//!
//! Lecture entries appear in two places: `lectures-list` containers (one
//! per course, on course and show-all pages) and `lecture-preview` items
//! nested in course previews. Both share the same item markup.

use super::config::LectureSelectors;
use super::context::LectureListContext;
use super::video_id::VideoIdExtractor;
use super::{compile_selector, ContextualParser, Document, Node};
use crate::domain::Lecture;
use crate::infrastructure::scrape_error::ScrapeResult;
use scraper::Selector;
use std::sync::Arc;
use tracing::debug;

pub struct LectureParser {
    list_selector: Selector,
    list_item_selector: Selector,
    preview_item_selector: Selector,
    name_selector: Selector,
    link_selector: Selector,
    icon_selector: Selector,
    instructor_selector: Selector,
    length_selector: Selector,
    video_ids: Arc<VideoIdExtractor>,
}

impl LectureParser {
    pub fn with_config(
        selectors: &LectureSelectors,
        video_ids: Arc<VideoIdExtractor>,
    ) -> ScrapeResult<Self> {
        Ok(Self {
            list_selector: compile_selector(&selectors.list)?,
            list_item_selector: compile_selector(&selectors.list_item)?,
            preview_item_selector: compile_selector(&selectors.preview_item)?,
            name_selector: compile_selector(&selectors.name)?,
            link_selector: compile_selector(&selectors.link)?,
            icon_selector: compile_selector(&selectors.icon)?,
            instructor_selector: compile_selector(&selectors.instructor)?,
            length_selector: compile_selector(&selectors.length)?,
            video_ids,
        })
    }

    /// Lectures from every lecture list on the page, concatenated in page
    /// order.
    ///
    /// With `course_name` set, entries whose name contains it are
    /// *dropped*, not kept.
    pub fn lectures_from_lists(
        &self,
        document: &Document,
        course_name: Option<&str>,
    ) -> Vec<Lecture> {
        let mut lectures = Vec::new();

        for list in document.find_all(&self.list_selector) {
            lectures.extend(
                list.find_all(&self.list_item_selector)
                    .iter()
                    .map(|item| self.extract_lecture(item)),
            );
        }

        if let Some(course_name) = course_name {
            let before = lectures.len();
            lectures.retain(|lecture| !lecture.name.contains(course_name));
            debug!(
                "Filtered out {} of {} lectures containing '{}'",
                before - lectures.len(),
                before,
                course_name
            );
        }

        lectures
    }

    /// Lectures nested in a single course preview
    pub fn lectures_from_preview(&self, course_preview: &Node<'_>) -> Vec<Lecture> {
        course_preview
            .find_all(&self.preview_item_selector)
            .iter()
            .map(|item| self.extract_lecture(item))
            .collect()
    }

    fn extract_lecture(&self, item: &Node<'_>) -> Lecture {
        let name = item
            .find_first(&self.name_selector)
            .map(|node| node.text())
            .unwrap_or_default();

        let link = item.find_first(&self.link_selector);
        let url = link
            .and_then(|a| a.attr("href"))
            .unwrap_or_default()
            .to_string();
        let icon = link
            .and_then(|a| a.find_first(&self.icon_selector))
            .and_then(|img| img.attr("src"))
            .map(ToString::to_string);

        let instructor = item
            .find_first(&self.instructor_selector)
            .map(|node| node.text());
        let length = item.find_first(&self.length_selector).map(|node| node.text());

        let youtube_id = self.video_ids.from_url(&url);

        Lecture {
            name,
            url,
            icon,
            instructor,
            length,
            youtube_id,
        }
    }
}

impl ContextualParser for LectureParser {
    type Output = Vec<Lecture>;
    type Context = LectureListContext;

    fn parse_with_context(
        &self,
        document: &Document,
        context: &Self::Context,
    ) -> ScrapeResult<Self::Output> {
        Ok(self.lectures_from_lists(document, context.course_name.as_deref()))
    }
}
