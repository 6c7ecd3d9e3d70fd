//! Tauri commands for the crawl workflow
//!
//! This module contains all webview-invokable command implementations.
//! Errors cross the boundary as display strings, which the frontend
//! shows in its alert.

use tauri::State;
use webtotext_core::ExportFile;

use crate::SessionState;

/// Run one crawl with the given inputs
///
/// Validation, the cooldown, and the in-flight gate all apply; the
/// frontend disables its trigger while this is pending.
///
/// # Arguments
/// * `state` - Managed SessionState from Tauri
/// * `url` - Raw URL field text
/// * `max_pages` - Page-count field value (clamped above 100)
///
/// # Returns
/// The sanitized editor text for the display widget
///
/// # Errors
/// Returns the error message as String if any gate or the request fails
#[tauri::command]
pub async fn crawl(
    state: State<'_, SessionState>,
    url: String,
    max_pages: i64,
) -> Result<String, String> {
    let mut session = state.session.lock().await;
    session.set_url(&url);
    session.set_page_count(max_pages);
    session.crawl().await.map_err(|e| e.to_string())?;
    Ok(session.editor_text())
}

/// Read the editor buffer's current text
#[tauri::command]
pub async fn editor_text(state: State<'_, SessionState>) -> Result<String, String> {
    let session = state.session.lock().await;
    Ok(session.editor_text())
}

/// Mirror a webview edit into the session's buffer
///
/// Keeps the Rust-side copy authoritative for the JSON export, so user
/// edits to the displayed result are honored there.
#[tauri::command]
pub async fn set_editor_text(
    state: State<'_, SessionState>,
    text: String,
) -> Result<(), String> {
    let mut session = state.session.lock().await;
    session.set_editor_text(&text);
    Ok(())
}

/// Build the `crawl_result.json` download payload
///
/// The frontend packages the contents as a blob, triggers the save
/// dialog through a synthetic click, and revokes the object URL
/// immediately afterwards.
///
/// # Errors
/// Returns the error message as String when no result is stored
#[tauri::command]
pub async fn export_json(state: State<'_, SessionState>) -> Result<ExportFile, String> {
    let session = state.session.lock().await;
    session.export_json().map_err(|e| e.to_string())
}

/// Build the `crawl_result.txt` download payload
///
/// # Errors
/// Returns the error message as String when no result is stored or its
/// `pages` field is not an array; no payload is produced then
#[tauri::command]
pub async fn export_text(state: State<'_, SessionState>) -> Result<ExportFile, String> {
    let session = state.session.lock().await;
    session.export_text().map_err(|e| e.to_string())
}
