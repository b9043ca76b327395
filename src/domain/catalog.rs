use serde::{Deserialize, Serialize};

/// Subject entry from the catalog index page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectStub {
    pub name: String,
    pub url: String,
}

/// Full subject record assembled from the subject page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub url: String,
    pub description: String,
    pub courses: Vec<Course>,
    /// Lectures from the show-all variant of the subject page
    pub lectures: Vec<Lecture>,
}

/// Course preview found on a subject listing page.
///
/// Courses have no detail page of their own in this catalog, so `url`
/// is the subject page the course was listed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub url: String,
    pub lectures: Vec<Lecture>,
}

/// Single lecture entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    pub name: String,
    /// Link as written in the markup (may be relative)
    pub url: String,
    pub icon: Option<String>,
    pub instructor: Option<String>,
    /// Display duration, e.g. "52:10"
    pub length: Option<String>,
    pub youtube_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMetadata {
    pub name: String,
    pub lectures: Vec<Lecture>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureMetadata {
    pub name: String,
    pub youtube_id: Option<String>,
    #[serde(rename = "courseName", skip_serializing_if = "Option::is_none", default)]
    pub course_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lecture_metadata_omits_missing_course_name() {
        let meta = LectureMetadata {
            name: "Lecture 1".to_string(),
            youtube_id: Some("abc".to_string()),
            course_name: None,
        };

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Lecture 1", "youtube_id": "abc"}));
    }

    #[test]
    fn test_subject_serializes_nested_records() {
        let subject = Subject {
            name: "Physics".to_string(),
            url: "http://example.com/physics".to_string(),
            description: String::new(),
            courses: vec![Course {
                name: "Mechanics".to_string(),
                url: "http://example.com/physics".to_string(),
                lectures: vec![],
            }],
            lectures: vec![],
        };

        let json = serde_json::to_value(&subject).unwrap();
        assert_eq!(json["courses"][0]["name"], "Mechanics");
        assert!(json["lectures"].as_array().unwrap().is_empty());
    }
}
