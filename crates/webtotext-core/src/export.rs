//! Result export
//!
//! Builds the two downloadable payloads: the editor buffer verbatim as
//! JSON, and the stored result flattened to plain text.

use serde_json::Value;

use crate::error::{Result, WebtotextError};
use crate::types::{CrawlResult, ExportFile};

/// Download name for the JSON export
pub const JSON_FILE_NAME: &str = "crawl_result.json";

/// MIME type for the JSON export
pub const JSON_MIME_TYPE: &str = "application/json";

/// Download name for the plain-text export
pub const TEXT_FILE_NAME: &str = "crawl_result.txt";

/// MIME type for the plain-text export
pub const TEXT_MIME_TYPE: &str = "text/plain;charset=utf-8";

/// Separator between flattened fragments in the text export
const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Keys collected from each page's `content`, in the order users see
/// them in the exported file. The order is user-observable; do not
/// reorder.
const CONTENT_KEYS: [&str; 5] = ["h1", "h2", "h3", "h4", "text"];

/// Package the editor buffer's current text as the JSON download
///
/// The text is taken verbatim, so user edits to the displayed JSON end
/// up in the file exactly as typed.
pub fn export_json(buffer_text: &str) -> ExportFile {
    ExportFile {
        file_name: JSON_FILE_NAME.to_string(),
        mime_type: JSON_MIME_TYPE.to_string(),
        contents: buffer_text.to_string(),
    }
}

/// Flatten a stored result into one ordered sequence of text fragments
///
/// Per page, in page order: pages whose `content` is not a JSON object
/// contribute nothing; otherwise the `h1`..`h4` arrays are collected in
/// that fixed order, then `text`, with a missing or non-array value
/// treated as empty and intra-array order preserved. Non-string array
/// members contribute nothing.
///
/// # Errors
/// `MalformedResult` when the result's `pages` is missing or not an
/// array.
pub fn flatten_result(result: &CrawlResult) -> Result<Vec<String>> {
    let pages = result.pages().ok_or_else(|| {
        WebtotextError::MalformedResult("pages is not an array".to_string())
    })?;

    let mut fragments = Vec::new();
    for page in pages {
        let Some(content) = page.get("content").and_then(Value::as_object) else {
            continue;
        };

        for key in CONTENT_KEYS {
            let Some(values) = content.get(key).and_then(Value::as_array) else {
                continue;
            };
            fragments.extend(
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string),
            );
        }
    }

    Ok(fragments)
}

/// Package a stored result as the plain-text download
///
/// # Errors
/// `MalformedResult` when `pages` is missing or not an array; no file
/// is produced in that case.
pub fn export_text(result: &CrawlResult) -> Result<ExportFile> {
    let fragments = flatten_result(result)?;

    Ok(ExportFile {
        file_name: TEXT_FILE_NAME.to_string(),
        mime_type: TEXT_MIME_TYPE.to_string(),
        contents: fragments.join(FRAGMENT_SEPARATOR),
    })
}
