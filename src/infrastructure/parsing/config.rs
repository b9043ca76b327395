//! Selector map for catalog markup
//!
//! Centralized CSS selectors and attribute names for every field the
//! extractors read. A markup migration only needs edits here.

use serde::{Deserialize, Serialize};

/// All markup assumptions, grouped by page type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorMap {
    pub subject_list: SubjectListSelectors,
    pub subject_detail: SubjectDetailSelectors,
    pub course: CourseSelectors,
    pub course_page: CoursePageSelectors,
    pub lecture: LectureSelectors,
    pub lecture_detail: LectureDetailSelectors,
    pub player: PlayerSelectors,
}

/// Subject index page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectListSelectors {
    /// Primary content element; required
    pub content: String,
    /// Subject links inside the content element
    pub link: String,
}

impl Default for SubjectListSelectors {
    fn default() -> Self {
        Self {
            content: "article".to_string(),
            link: "a".to_string(),
        }
    }
}

/// Subject detail page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectDetailSelectors {
    pub name: String,
    pub description: String,
}

impl Default for SubjectDetailSelectors {
    fn default() -> Self {
        Self {
            name: "article h1".to_string(),
            description: "div[itemprop='description']".to_string(),
        }
    }
}

/// Course previews and pagination on subject listing pages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseSelectors {
    pub preview: String,
    /// A preview only counts as a course when it contains this element
    pub article: String,
    pub name: String,
    pub pagination: String,
}

impl Default for CourseSelectors {
    fn default() -> Self {
        Self {
            preview: "li.course-preview".to_string(),
            article: "article".to_string(),
            name: "article h3 a".to_string(),
            pagination: "a.page-numbers".to_string(),
        }
    }
}

/// Course page heading
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoursePageSelectors {
    pub name: String,
}

impl Default for CoursePageSelectors {
    fn default() -> Self {
        Self {
            name: "section.pagenav span".to_string(),
        }
    }
}

/// Lecture entries, shared by lecture lists and course previews
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LectureSelectors {
    /// One container per course, in page order
    pub list: String,
    /// Items inside a lecture list container
    pub list_item: String,
    /// Items inside a course preview
    pub preview_item: String,
    pub name: String,
    pub link: String,
    /// Looked up inside the link element
    pub icon: String,
    pub instructor: String,
    pub length: String,
}

impl Default for LectureSelectors {
    fn default() -> Self {
        Self {
            list: "div.lectures-list".to_string(),
            list_item: "li".to_string(),
            preview_item: "li.lecture-preview".to_string(),
            name: "article h4".to_string(),
            link: "a".to_string(),
            icon: "img".to_string(),
            instructor: "span.video-instructor".to_string(),
            length: "span.video-length".to_string(),
        }
    }
}

/// Lecture watch page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LectureDetailSelectors {
    pub title: String,
}

impl Default for LectureDetailSelectors {
    fn default() -> Self {
        Self {
            title: "span#eow-title".to_string(),
        }
    }
}

/// Embedded video player
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSelectors {
    pub embed: String,
    pub src_attribute: String,
    /// First capture group is the video id
    pub src_pattern: String,
    /// Query marker that precedes the id in a watch URL
    pub url_marker: String,
}

impl Default for PlayerSelectors {
    fn default() -> Self {
        Self {
            embed: "embed".to_string(),
            src_attribute: "src".to_string(),
            src_pattern: r#"http://www\.youtube\.com/v/([^?&"/]+)\??"#.to_string(),
            url_marker: "v=".to_string(),
        }
    }
}
