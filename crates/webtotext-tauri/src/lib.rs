//! Websitetotext Tauri Integration
//!
//! Exposes the crawl session to a webview front-end as Tauri commands.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(webtotext_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! // Crawl and receive the sanitized editor text
//! const text = await invoke('plugin:webtotext|crawl', {
//!   url: 'example.com',
//!   maxPages: 10
//! });
//!
//! // Build a download payload; the frontend packages it as a blob,
//! // clicks a synthetic anchor, and revokes the object URL right after
//! const file = await invoke('plugin:webtotext|export_text');
//! ```

use std::sync::Arc;
use tokio::sync::Mutex;

use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};
use webtotext_core::{ClientConfig, CrawlSession};

mod commands;

/// Thread-safe wrapper for the crawl session
///
/// Uses Arc<Mutex<>> so commands from the webview serialize their
/// access; together with the session's loading flag this keeps one
/// crawl in flight at a time.
pub struct SessionState {
    pub(crate) session: Arc<Mutex<CrawlSession>>,
}

impl SessionState {
    /// Create session state with environment-derived configuration
    ///
    /// # Errors
    /// Returns error string if client initialization fails
    pub fn new() -> Result<Self, String> {
        let session = CrawlSession::with_config(ClientConfig::from_env())
            .map_err(|e| e.to_string())?;
        Ok(Self {
            session: Arc::new(Mutex::new(session)),
        })
    }
}

/// Initialize the webtotext plugin
///
/// # Example
/// ```ignore
/// tauri::Builder::default()
///     .plugin(webtotext_tauri::init())
///     .run(tauri::generate_context!())
///     .expect("error while running tauri application");
/// ```
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("webtotext")
        .invoke_handler(tauri::generate_handler![
            commands::crawl,
            commands::editor_text,
            commands::set_editor_text,
            commands::export_json,
            commands::export_text
        ])
        .setup(|app, _api| {
            let state = SessionState::new().map_err(Box::<dyn std::error::Error>::from)?;
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export the payload type for convenience
pub use webtotext_core::ExportFile;
