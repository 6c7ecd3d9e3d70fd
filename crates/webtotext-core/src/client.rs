//! HTTP client for the remote crawl API
//!
//! One cookie-bearing reqwest client per session, issuing authenticated
//! `POST /crawl` requests and decoding the JSON response body.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, WebtotextError};
use crate::types::{CrawlRequest, CrawlResult};

/// Documented default crawl API host, used when no override is set
pub const DEFAULT_API_URL: &str = "https://api.websitetotext.com";

/// Environment variable overriding the crawl API base URL
pub const API_URL_ENV: &str = "WEBTOTEXT_API_URL";

/// Anti-forgery header sent with every crawl request
const CSRF_HEADER: &str = "X-CSRF-TOKEN";

/// Configuration for the crawl client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the crawl API, without trailing slash
    pub api_base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Anti-forgery token supplied by the embedding UI, sourced from the
    /// page's `<meta name="csrf-token">` tag; empty string when absent
    pub csrf_token: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
            csrf_token: String::new(),
        }
    }
}

impl ClientConfig {
    /// Build a configuration from the environment
    ///
    /// Reads [`API_URL_ENV`] for the base URL, falling back to
    /// [`DEFAULT_API_URL`]. A trailing slash on the override is trimmed
    /// so path joining stays uniform.
    pub fn from_env() -> Self {
        let api_base_url = std::env::var(API_URL_ENV)
            .map(|value| value.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self {
            api_base_url,
            ..Self::default()
        }
    }
}

/// HTTP client wrapper for the crawl API
///
/// Handles all communication with the remote crawler:
/// - session cookies included on every request (credentials)
/// - the anti-forgery token header
/// - status triage and JSON decoding in one place
///
/// There is no retry and no cancellation; an in-flight request runs to
/// completion or failure, and failures surface through the transport's
/// own error and timeout behavior.
pub struct CrawlClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl CrawlClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_store(true)
            .build()
            .map_err(WebtotextError::Http)?;

        Ok(Self { client, config })
    }

    /// Send a validated crawl request and decode the result
    ///
    /// # Arguments
    /// * `request` - A validated [`CrawlRequest`]
    ///
    /// # Returns
    /// The full decoded response body as a [`CrawlResult`]; the caller
    /// replaces any prior stored result wholesale.
    ///
    /// # Errors
    /// - `Http` - transport failure (connect, timeout, decode)
    /// - `Api` - the API answered with a non-2xx status
    pub async fn crawl(&self, request: &CrawlRequest) -> Result<CrawlResult> {
        let endpoint = format!("{}/crawl", self.config.api_base_url);
        debug!(url = request.url(), max_pages = request.max_pages(), "sending crawl request");

        let response = self
            .client
            .post(&endpoint)
            .header(CSRF_HEADER, &self.config.csrf_token)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "crawl request failed in transport");
                WebtotextError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "crawl API returned error status");
            return Err(WebtotextError::Api(status.as_u16()));
        }

        let body: Value = response.json().await.map_err(|e| {
            warn!(error = %e, "crawl response body could not be decoded");
            WebtotextError::Http(e)
        })?;

        Ok(CrawlResult::new(body))
    }

    /// The active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
