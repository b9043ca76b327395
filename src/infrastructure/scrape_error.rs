//! Error types for fetching and extracting catalog pages
//!
//! Absent optional fields are not errors; extractors return `None` or an
//! empty string for them. Only missing structural elements, transport
//! failures and bad configuration surface here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {url} - {message}")]
    Fetch { url: String, message: String },

    #[error("HTTP error {status}: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Required element '{element}' not found in HTML")]
    MissingElement {
        element: String,
        context: Option<String>,
    },

    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to load config: {source}")]
    ConfigLoad {
        #[from]
        source: config::ConfigError,
    },
}

impl ScrapeError {
    pub fn fetch(url: &str, message: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.to_string(),
            message: message.into(),
        }
    }

    /// Create a missing element error with context
    pub fn missing_element(element: &str, context: Option<&str>) -> Self {
        Self::MissingElement {
            element: element.to_string(),
            context: context.map(ToString::to_string),
        }
    }

    pub fn invalid_selector(selector: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }

    /// Transport level failure (network, DNS, timeout or non-2xx status)
    pub const fn is_fetch_error(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::HttpStatus { .. })
    }

    /// Page was fetched but did not have the expected shape
    pub const fn is_extraction_error(&self) -> bool {
        matches!(self, Self::MissingElement { .. })
    }

    /// HTTP status code, if the failure carried one
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
