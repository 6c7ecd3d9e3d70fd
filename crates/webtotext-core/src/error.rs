//! Error types for the crawl client workflow
//!
//! Provides one error enum covering validation, cooldown, transport, and
//! export failures, with human-readable messages and Tauri-compatible
//! serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all crawl workflow operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility. No variant is fatal to the
/// session; the caller stays interactive after any of these.
#[derive(Error, Debug)]
pub enum WebtotextError {
    /// HTTP request failed at the transport level
    #[error("Crawl request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Crawl API answered with a non-success status
    #[error("Crawl API returned status {0}")]
    Api(u16),

    /// URL did not survive normalization and validation
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Page count outside 1..=100
    #[error("Invalid page count: {0} (must be between 1 and 100)")]
    InvalidPageCount(i64),

    /// Request attempted before the cooldown elapsed
    #[error("Please wait {wait_secs}s before starting another crawl")]
    Cooldown {
        /// Remaining wait, rounded up to whole seconds
        wait_secs: u64,
    },

    /// A crawl is already in flight for this session
    #[error("A crawl is already in progress")]
    InFlight,

    /// Stored result does not have the shape an export needs
    #[error("Crawl result is malformed: {0}")]
    MalformedResult(String),

    /// Export requested with no stored result
    #[error("No crawl result to export")]
    NoResult,
}

impl Serialize for WebtotextError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for crawl workflow operations
pub type Result<T> = std::result::Result<T, WebtotextError>;
