//! Websitetotext Client Core Library
//!
//! Client-side workflow for the websitetotext crawl service: validate a
//! target URL and page limit, send the crawl request to the remote API,
//! render the JSON result into a display buffer, and export it as JSON
//! or flattened plain text.
//!
//! # Overview
//!
//! The crawler itself lives behind the API boundary; this crate is the
//! request/export workflow around it:
//! - input normalization and validation gates
//! - a 5-second cooldown between accepted requests
//! - an authenticated, cookie-bearing HTTP client for `POST /crawl`
//! - a sanitizing bridge to an opaque editor buffer
//! - JSON and plain-text export payloads
//!
//! All mutable view state lives in one [`CrawlSession`]; there are no
//! globals.
//!
//! # Example
//!
//! ```no_run
//! use webtotext_core::{CrawlSession, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut session = CrawlSession::new()?;
//!     session.set_url("example.com");
//!     session.set_page_count(10);
//!
//!     session.crawl().await?;
//!
//!     // The editor shows the sanitized, indented JSON result
//!     println!("{}", session.editor_text());
//!
//!     // Downloads: the buffer verbatim, and the flattened text
//!     let json_file = session.export_json()?;
//!     let text_file = session.export_text()?;
//!     println!("{}: {} bytes", json_file.file_name, json_file.contents.len());
//!     println!("{}: {} bytes", text_file.file_name, text_file.contents.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Exports
//!
//! The JSON download reads the editor buffer verbatim, so edits made to
//! the displayed result end up in the file. The text download flattens
//! the *stored* result instead: per page, `h1`..`h4` then `text`, joined
//! with blank lines. That order is user-observable; see [`export`].

mod client;
mod cooldown;
pub mod editor;
mod error;
pub mod export;
mod session;
mod types;
pub mod url;

// Re-export client types
pub use client::{API_URL_ENV, ClientConfig, CrawlClient, DEFAULT_API_URL};

// Re-export the cooldown gate
pub use cooldown::{COOLDOWN, Cooldown};

// Re-export error types
pub use error::{Result, WebtotextError};

// Re-export the editor bridge surface
pub use editor::{EditorBuffer, TextBuffer, sanitize};

// Re-export the session controller
pub use session::CrawlSession;

// Re-export data types
pub use types::{CrawlRequest, CrawlResult, ExportFile};

// Re-export validation helpers for convenience
pub use crate::url::{MAX_PAGES, can_crawl, clamp_page_count, normalize_url};
