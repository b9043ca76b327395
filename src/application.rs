//! Application layer
//!
//! High-level scraping operations built on the infrastructure parsers.

pub mod catalog_scraper;

pub use catalog_scraper::CatalogScraper;
