//! HTTP client for fetching catalog pages
//!
//! One GET per call, no retries and no rate limiting. Idle connections are
//! not pooled, so every request opens its own connection and releases it
//! when the response is dropped, on success and on error alike.

use super::config::defaults;
use super::scrape_error::{ScrapeError, ScrapeResult};
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

/// Configuration for HTTP client behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
    /// Whether to follow redirects
    pub follow_redirects: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            user_agent: defaults::USER_AGENT.to_string(),
            follow_redirects: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> ScrapeResult<Self> {
        Self::with_config(&HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: &HttpClientConfig) -> ScrapeResult<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .gzip(true)
            .pool_max_idle_per_host(0)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .map_err(|e| ScrapeError::Configuration {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }

    /// Fetch a page and return its body as text.
    ///
    /// Only transport failures and non-2xx statuses are errors; an empty
    /// 2xx body comes back as an empty string.
    pub async fn fetch_html_string(&self, url: &str) -> ScrapeResult<String> {
        info!("🌐 HTTP GET: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::fetch(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!("❌ HTTP error {}: {}", status, url);
            return Err(ScrapeError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::fetch(url, format!("Failed to read response body: {e}")))?;

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = HttpClientConfig {
            timeout_seconds: 10,
            user_agent: "Test Agent".to_string(),
            follow_redirects: false,
        };

        let client = HttpClient::with_config(&config);
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let config = HttpClientConfig {
            timeout_seconds: 2,
            ..Default::default()
        };
        let client = HttpClient::with_config(&config).unwrap();

        // Port 9 (discard) on localhost is closed in test environments
        let err = client.fetch_html_string("http://127.0.0.1:9/").await.unwrap_err();
        assert!(err.is_fetch_error());
    }
}
