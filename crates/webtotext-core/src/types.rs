//! Core data types for the crawl client workflow
//!
//! Contains the request/result/export payloads used throughout the library.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, WebtotextError};
use crate::url::{normalize_url, validate_page_count, validate_url};

/// A validated crawl request, immutable once built
///
/// Construction is the only place input crosses from "raw field text"
/// to "sendable request": the URL is normalized and checked, the page
/// count bounds-checked. Serializes to the wire shape
/// `{ "url": ..., "max_pages": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlRequest {
    url: String,
    max_pages: u32,
}

impl CrawlRequest {
    /// Build a request from raw user input
    ///
    /// # Arguments
    /// * `url_input` - Raw URL field text; normalized before validation
    /// * `page_count` - Requested page limit
    ///
    /// # Errors
    /// - `InvalidUrl` if the normalized URL is not well formed
    /// - `InvalidPageCount` if the count is outside 1..=100
    ///
    /// # Example
    /// ```
    /// use webtotext_core::CrawlRequest;
    /// let request = CrawlRequest::new("  Example.COM ", 10).unwrap();
    /// assert_eq!(request.url(), "https://example.com");
    /// assert_eq!(request.max_pages(), 10);
    /// ```
    pub fn new(url_input: &str, page_count: i64) -> Result<Self> {
        let url = normalize_url(url_input);
        if !validate_url(&url) {
            return Err(WebtotextError::InvalidUrl(url_input.trim().to_string()));
        }
        if !validate_page_count(page_count) {
            return Err(WebtotextError::InvalidPageCount(page_count));
        }

        Ok(Self {
            url,
            max_pages: page_count as u32,
        })
    }

    /// The normalized target URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The validated page limit
    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }
}

/// The decoded crawl API response body, kept verbatim
///
/// The body is stored as raw JSON rather than re-shaped into structs:
/// the editor shows it exactly as received, the JSON export must
/// round-trip it, and the text export's structural checks ("pages is
/// an array", "content is an object") are part of the user-visible
/// contract, so a lenient shape is the honest one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrawlResult(Value);

impl CrawlResult {
    /// Wrap a decoded response body
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// The page list, when `pages` is present and an array
    pub fn pages(&self) -> Option<&Vec<Value>> {
        self.0.get("pages")?.as_array()
    }

    /// The raw response body
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Indented JSON text of the whole body, for display
    pub fn to_pretty(&self) -> String {
        // Serializing a Value cannot fail
        serde_json::to_string_pretty(&self.0).unwrap_or_default()
    }
}

/// A transient export payload handed to the embedding UI
///
/// The UI packages `contents` as a blob of `mime_type`, triggers the
/// save dialog for `file_name`, and revokes the object URL right after
/// the synthetic click. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFile {
    /// Suggested download file name
    pub file_name: String,
    /// MIME type for the blob
    pub mime_type: String,
    /// File contents, UTF-8 text for both export kinds
    pub contents: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_crawl_request_normalizes_url() {
        let request = CrawlRequest::new("Example.com", 5).unwrap();
        assert_eq!(request.url(), "https://example.com");
    }

    #[test]
    fn test_crawl_request_rejects_bad_url() {
        let result = CrawlRequest::new("   ", 5);
        assert!(matches!(result, Err(WebtotextError::InvalidUrl(_))));
    }

    #[test]
    fn test_crawl_request_rejects_bad_page_count() {
        assert!(matches!(
            CrawlRequest::new("example.com", 0),
            Err(WebtotextError::InvalidPageCount(0))
        ));
        assert!(matches!(
            CrawlRequest::new("example.com", 101),
            Err(WebtotextError::InvalidPageCount(101))
        ));
    }

    #[test]
    fn test_crawl_request_wire_shape() {
        let request = CrawlRequest::new("example.com", 25).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({ "url": "https://example.com", "max_pages": 25 })
        );
    }

    #[test]
    fn test_crawl_result_pages_when_array() {
        let result = CrawlResult::new(json!({ "pages": [{ "content": {} }] }));
        assert_eq!(result.pages().map(Vec::len), Some(1));
    }

    #[test]
    fn test_crawl_result_pages_when_missing_or_wrong_type() {
        assert!(CrawlResult::new(json!({})).pages().is_none());
        assert!(CrawlResult::new(json!({ "pages": "nope" })).pages().is_none());
        assert!(CrawlResult::new(json!(null)).pages().is_none());
    }

    #[test]
    fn test_crawl_result_pretty_round_trips() {
        let body = json!({ "pages": [{ "content": { "h1": ["Title"] } }] });
        let result = CrawlResult::new(body.clone());
        let reparsed: Value = serde_json::from_str(&result.to_pretty()).unwrap();
        assert_eq!(reparsed, body);
    }

    #[test]
    fn test_export_file_serialization() {
        let file = ExportFile {
            file_name: "crawl_result.txt".to_string(),
            mime_type: "text/plain;charset=utf-8".to_string(),
            contents: "A\n\nb".to_string(),
        };

        let json = serde_json::to_string(&file).expect("Serialization should succeed");
        let deserialized: ExportFile =
            serde_json::from_str(&json).expect("Deserialization should succeed");

        assert_eq!(file, deserialized);
    }
}
