//! Configuration infrastructure
//!
//! Everything that used to be a module-level constant (origin, index
//! path, show-all query, selectors) lives in [`ScraperConfig`], so tests
//! can point the scraper at a local mock origin.

use super::parsing::SelectorMap;
use super::scrape_error::{ScrapeError, ScrapeResult};
use super::simple_http_client::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::info;
use url::Url;

/// Environment variable prefix, e.g. `LECTURE_SCRAPER__BASE_URL`
pub const ENV_PREFIX: &str = "LECTURE_SCRAPER";

/// Complete scraper configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Catalog origin all relative links are resolved against
    pub base_url: String,

    /// Path of the subject index page, relative to `base_url`
    pub subjects_path: String,

    /// Query appended to a subject URL to request the unpaginated listing
    pub showall_query: String,

    pub http: HttpClientConfig,

    pub selectors: SelectorMap,

    pub logging: LoggingConfig,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: academic_earth::BASE_URL.to_string(),
            subjects_path: academic_earth::SUBJECTS_PATH.to_string(),
            showall_query: academic_earth::SHOWALL_QUERY.to_string(),
            http: HttpClientConfig::default(),
            selectors: SelectorMap::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ScraperConfig {
    /// Default configuration pointed at a different origin
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Load from a config file (any format the `config` crate understands),
    /// with `LECTURE_SCRAPER__*` environment variables layered on top.
    pub fn from_file(path: &str) -> ScrapeResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        info!("Loaded scraper configuration from {}", path);
        Ok(config)
    }

    pub fn validate(&self) -> ScrapeResult<()> {
        Url::parse(&self.base_url).map_err(|e| ScrapeError::InvalidUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        if self.subjects_path.trim().is_empty() {
            return Err(ScrapeError::Configuration {
                message: "subjects_path must not be empty".to_string(),
            });
        }

        if self.http.timeout_seconds == 0 {
            return Err(ScrapeError::Configuration {
                message: "http.timeout_seconds must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Enable console output
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Directory for the log file; defaults to `logs/` next to the executable
    pub log_dir: Option<PathBuf>,

    /// Module-specific log level filters (e.g., "reqwest": "info")
    pub module_filters: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            console_output: true,
            file_output: false,
            log_dir: None,
            module_filters: HashMap::new(),
        }
    }
}

/// Locates the on-disk configuration file
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Get the application configuration directory
    pub fn get_config_dir() -> ScrapeResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ScrapeError::Configuration {
                message: "Failed to get user config directory".to_string(),
            })?
            .join("lecture-catalog-scraper");

        Ok(config_dir)
    }

    pub fn new() -> ScrapeResult<Self> {
        let config_path = Self::get_config_dir()?.join("config.toml");
        Ok(Self { config_path })
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default(&self) -> ScrapeResult<ScraperConfig> {
        if !self.config_path.exists() {
            info!("No config file at {:?}, using defaults", self.config_path);
            return Ok(ScraperConfig::default());
        }

        let path = self.config_path.to_str().ok_or_else(|| ScrapeError::Configuration {
            message: format!("Config path is not valid UTF-8: {:?}", self.config_path),
        })?;
        ScraperConfig::from_file(path)
    }
}

/// Academic Earth catalog constants
pub mod academic_earth {
    /// Base URL for the catalog website
    pub const BASE_URL: &str = "http://www.academicearth.org";

    /// Subject index page
    pub const SUBJECTS_PATH: &str = "online-college-courses";

    /// Requests every lecture of a subject on a single page
    pub const SHOWALL_QUERY: &str = "showall=true";
}

/// Default values for HTTP settings
pub mod defaults {
    /// Default request timeout in seconds
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

    pub const USER_AGENT: &str = concat!("lecture-catalog-scraper/", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScraperConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, "http://www.academicearth.org");
        assert_eq!(config.subjects_path, "online-college-courses");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ScraperConfig::with_base_url("::not a url::");
        assert!(matches!(config.validate(), Err(ScrapeError::InvalidUrl { .. })));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = ScraperConfig::default();
        config.http.timeout_seconds = 0;
        assert!(matches!(config.validate(), Err(ScrapeError::Configuration { .. })));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
base_url = "http://localhost:8080"

[selectors.lecture]
instructor = "span.lecturer"
"#
        )
        .unwrap();

        let config = ScraperConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.selectors.lecture.instructor, "span.lecturer");
        assert_eq!(config.selectors.lecture.length, "span.video-length");
        assert_eq!(config.subjects_path, "online-college-courses");
    }

    #[test]
    fn test_config_manager_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("absent.toml"));
        let config = manager.load_or_default().unwrap();
        assert_eq!(config.base_url, academic_earth::BASE_URL);
    }
}
