//! Infrastructure layer: HTTP fetching, URL resolution, HTML parsing,
//! configuration and logging.

pub mod config;
pub mod logging;
pub mod parsing;
pub mod scrape_error;
pub mod simple_http_client;
pub mod url_resolver;

// Re-export commonly used items
pub use config::{ConfigManager, LoggingConfig, ScraperConfig};
pub use logging::{init_logging, init_logging_with_config};
pub use parsing::{Document, SelectorMap, VideoIdExtractor};
pub use scrape_error::{ScrapeError, ScrapeResult};
pub use simple_http_client::{HttpClient, HttpClientConfig};
pub use url_resolver::UrlResolver;
