//! URL normalization and input validation
//!
//! Provides the pure gate functions consulted before any crawl request:
//! URL normalization/validation and page-count checks.

use ::url::Url;

/// Maximum number of pages a single crawl request may ask for
pub const MAX_PAGES: i64 = 100;

/// Normalizes a raw URL string for crawling
///
/// Trims surrounding whitespace, lowercases the whole string, and
/// prefixes `https://` when neither `http://` nor `https://` is
/// present. An existing scheme is preserved.
///
/// # Example
/// ```
/// use webtotext_core::url::normalize_url;
/// assert_eq!(normalize_url("  Example.COM  "), "https://example.com");
/// assert_eq!(normalize_url("HTTP://Example.com"), "http://example.com");
/// ```
pub fn normalize_url(input: &str) -> String {
    let lowered = input.trim().to_lowercase();

    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        lowered
    } else {
        format!("https://{}", lowered)
    }
}

/// Checks that a normalized URL string is a well-formed URL with a host
///
/// # Example
/// ```
/// use webtotext_core::url::validate_url;
/// assert!(validate_url("https://example.com"));
/// assert!(!validate_url("https://"));
/// ```
pub fn validate_url(normalized: &str) -> bool {
    match Url::parse(normalized) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

/// Checks that a page count is a positive integer within the ceiling
///
/// # Example
/// ```
/// use webtotext_core::url::validate_page_count;
/// assert!(validate_page_count(1));
/// assert!(validate_page_count(100));
/// assert!(!validate_page_count(0));
/// assert!(!validate_page_count(101));
/// ```
pub fn validate_page_count(count: i64) -> bool {
    (1..=MAX_PAGES).contains(&count)
}

/// Clamps an above-ceiling page count down to [`MAX_PAGES`]
///
/// Values at or below the ceiling pass through unchanged, including
/// non-positive ones; those are caught by [`validate_page_count`]
/// instead of being silently repaired.
pub fn clamp_page_count(count: i64) -> i64 {
    count.min(MAX_PAGES)
}

/// Combined gate: true only when both the URL and the page count are valid
///
/// Every crawl-triggering action consults this and reports a validation
/// error instead of sending a request when it is false.
pub fn can_crawl(url_input: &str, page_count: i64) -> bool {
    validate_url(&normalize_url(url_input)) && validate_page_count(page_count)
}
