//! Crawl session controller
//!
//! Owns the whole view state of one crawl session: the input fields,
//! the stored result, the editor buffer, the cooldown gate, and the
//! loading flag. There are no ambient globals; every state transition
//! goes through this controller.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::client::{ClientConfig, CrawlClient};
use crate::cooldown::Cooldown;
use crate::editor::{EditorBuffer, TextBuffer, render_result};
use crate::error::{Result, WebtotextError};
use crate::export;
use crate::types::{CrawlRequest, CrawlResult, ExportFile};
use crate::url::{can_crawl, clamp_page_count};

/// Clears the loading flag when dropped
///
/// Holding the flag behind a drop guard makes the release unconditional:
/// success, error, and a cancelled future all pass through `drop`.
struct LoadingGuard(Arc<AtomicBool>);

impl LoadingGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Result<Self> {
        if flag.swap(true, Ordering::SeqCst) {
            return Err(WebtotextError::InFlight);
        }
        Ok(Self(Arc::clone(flag)))
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// One user's crawl session
///
/// The session is the single writer for both the stored result (written
/// only on a successful crawl) and the editor buffer (written by the
/// render step and by explicit webview edits). Exports read from it on
/// demand and never persist anything.
pub struct CrawlSession {
    client: CrawlClient,
    cooldown: Cooldown,
    url_input: String,
    page_count: i64,
    result: Option<CrawlResult>,
    buffer: EditorBuffer,
    loading: Arc<AtomicBool>,
}

impl CrawlSession {
    /// Create a session with default client configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a session with custom client configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: CrawlClient::with_config(config)?,
            cooldown: Cooldown::new(),
            url_input: String::new(),
            page_count: 10,
            result: None,
            buffer: EditorBuffer::new(),
            loading: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Update the URL input field
    pub fn set_url(&mut self, url: &str) {
        self.url_input = url.to_string();
    }

    /// The current raw URL field text
    pub fn url(&self) -> &str {
        &self.url_input
    }

    /// Update the page-count field
    ///
    /// Values above the ceiling are clamped down to it, the way the
    /// display field behaves; non-positive values are stored as-is and
    /// rejected at crawl time.
    pub fn set_page_count(&mut self, count: i64) {
        self.page_count = clamp_page_count(count);
    }

    /// The current page-count field value
    pub fn page_count(&self) -> i64 {
        self.page_count
    }

    /// Whether the current field values would pass validation
    pub fn can_crawl(&self) -> bool {
        can_crawl(&self.url_input, self.page_count)
    }

    /// Whether a crawl request is in flight
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Run one crawl with the current field values
    ///
    /// Gates in order: a request already in flight, input validation,
    /// the cooldown (whose timestamp is recorded here, before any
    /// network I/O). On success the decoded result replaces the stored
    /// one wholesale and is rendered into the editor buffer. On any
    /// failure the previous result and buffer are left untouched. The
    /// loading flag is cleared on every exit path.
    ///
    /// # Errors
    /// - `InFlight` - a crawl is already running for this session
    /// - `InvalidUrl` / `InvalidPageCount` - validation failed, nothing sent
    /// - `Cooldown` - attempted inside the 5 s window, nothing sent
    /// - `Http` / `Api` - the request failed; state unchanged
    pub async fn crawl(&mut self) -> Result<()> {
        if self.is_loading() {
            return Err(WebtotextError::InFlight);
        }

        let request = CrawlRequest::new(&self.url_input, self.page_count)?;
        self.cooldown.try_acquire()?;

        let _loading = LoadingGuard::acquire(&self.loading)?;

        match self.client.crawl(&request).await {
            Ok(result) => {
                render_result(&result, &mut self.buffer);
                self.result = Some(result);
                info!(url = request.url(), "crawl completed");
                Ok(())
            }
            Err(e) => {
                warn!(url = request.url(), error = %e, "crawl failed, keeping previous result");
                Err(e)
            }
        }
    }

    /// The stored result of the last successful crawl, if any
    pub fn result(&self) -> Option<&CrawlResult> {
        self.result.as_ref()
    }

    /// The editor buffer's current text, verbatim
    pub fn editor_text(&self) -> String {
        self.buffer.read_all()
    }

    /// Replace the editor buffer with webview-edited text
    pub fn set_editor_text(&mut self, text: &str) {
        self.buffer.replace_all(text);
    }

    /// Build the JSON download from the editor buffer
    ///
    /// Reads the buffer verbatim, so post-crawl edits are exported as
    /// typed.
    ///
    /// # Errors
    /// `NoResult` when no crawl has succeeded yet.
    pub fn export_json(&self) -> Result<ExportFile> {
        if self.result.is_none() {
            return Err(WebtotextError::NoResult);
        }
        Ok(export::export_json(&self.buffer.read_all()))
    }

    /// Build the plain-text download from the stored result
    ///
    /// Operates on the stored result, not the possibly-edited buffer.
    ///
    /// # Errors
    /// - `NoResult` when no crawl has succeeded yet
    /// - `MalformedResult` when the stored result has no `pages` array
    pub fn export_text(&self) -> Result<ExportFile> {
        let result = self.result.as_ref().ok_or(WebtotextError::NoResult)?;
        export::export_text(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session_for(server_uri: &str) -> CrawlSession {
        CrawlSession::with_config(ClientConfig {
            api_base_url: server_uri.to_string(),
            timeout_secs: 5,
            csrf_token: String::new(),
        })
        .unwrap()
    }

    async fn mock_success(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/crawl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[test]
    fn test_session_defaults() {
        let session = CrawlSession::new().unwrap();
        assert_eq!(session.url(), "");
        assert_eq!(session.page_count(), 10);
        assert!(!session.is_loading());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_set_page_count_clamps_above_ceiling() {
        let mut session = CrawlSession::new().unwrap();
        session.set_page_count(250);
        assert_eq!(session.page_count(), 100);

        session.set_page_count(7);
        assert_eq!(session.page_count(), 7);
    }

    #[test]
    fn test_can_crawl_gate() {
        let mut session = CrawlSession::new().unwrap();
        assert!(!session.can_crawl());

        session.set_url("example.com");
        assert!(session.can_crawl());

        session.set_page_count(0);
        assert!(!session.can_crawl());
    }

    #[tokio::test]
    async fn test_crawl_stores_result_and_renders_buffer() {
        let server = MockServer::start().await;
        mock_success(&server, json!({ "pages": [{ "content": { "h1": ["Hi"] } }] })).await;

        let mut session = session_for(&server.uri());
        session.set_url("example.com");
        session.set_page_count(3);

        session.crawl().await.unwrap();

        assert!(session.result().is_some());
        assert!(session.editor_text().contains("\"h1\""));
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_crawl_validation_failure_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/crawl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "pages": [] })))
            .expect(0)
            .mount(&server)
            .await;

        let mut session = session_for(&server.uri());
        session.set_url("   ");

        let result = session.crawl().await;
        assert!(matches!(result, Err(WebtotextError::InvalidUrl(_))));
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_crawl_failure_clears_loading_and_keeps_previous_result() {
        let server = MockServer::start().await;
        mock_success(&server, json!({ "pages": [{ "content": { "h1": ["First"] } }] })).await;

        let mut session = session_for(&server.uri());
        session.set_url("example.com");
        session.crawl().await.unwrap();
        let first_text = session.editor_text();

        // Replace the mock so the next request fails, and skip past the
        // cooldown without waiting.
        server.reset().await;
        Mock::given(method("POST"))
            .and(path("/crawl"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        session.cooldown = Cooldown::with_interval(std::time::Duration::ZERO);

        let result = session.crawl().await;
        assert!(matches!(result, Err(WebtotextError::Api(500))));
        assert!(!session.is_loading());
        assert_eq!(session.editor_text(), first_text);
        assert!(
            session.result().unwrap().pages().is_some(),
            "previous result must survive a failed crawl"
        );
    }

    #[tokio::test]
    async fn test_second_crawl_inside_cooldown_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/crawl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "pages": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let mut session = session_for(&server.uri());
        session.set_url("example.com");
        session.crawl().await.unwrap();

        match session.crawl().await {
            Err(WebtotextError::Cooldown { wait_secs }) => {
                assert!(wait_secs > 0 && wait_secs <= 5);
            }
            other => panic!("Expected Cooldown error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_export_json_reflects_buffer_edits() {
        let server = MockServer::start().await;
        mock_success(&server, json!({ "pages": [] })).await;

        let mut session = session_for(&server.uri());
        session.set_url("example.com");
        session.crawl().await.unwrap();

        session.set_editor_text("{ \"pages\": [], \"note\": \"edited by hand\" }");
        let file = session.export_json().unwrap();

        assert_eq!(file.contents, "{ \"pages\": [], \"note\": \"edited by hand\" }");
        assert_eq!(file.file_name, "crawl_result.json");
    }

    #[tokio::test]
    async fn test_export_text_uses_stored_result_not_buffer() {
        let server = MockServer::start().await;
        mock_success(
            &server,
            json!({ "pages": [{ "content": { "h1": ["A"], "text": ["b", "c"] } }] }),
        )
        .await;

        let mut session = session_for(&server.uri());
        session.set_url("example.com");
        session.crawl().await.unwrap();

        // Buffer edits must not leak into the text export
        session.set_editor_text("totally unrelated");
        let file = session.export_text().unwrap();

        assert_eq!(file.contents, "A\n\nb\n\nc");
    }

    #[test]
    fn test_exports_require_a_result() {
        let session = CrawlSession::new().unwrap();
        assert!(matches!(session.export_json(), Err(WebtotextError::NoResult)));
        assert!(matches!(session.export_text(), Err(WebtotextError::NoResult)));
    }

    #[tokio::test]
    async fn test_export_text_rejects_malformed_stored_result() {
        let server = MockServer::start().await;
        mock_success(&server, json!({ "status": "success" })).await;

        let mut session = session_for(&server.uri());
        session.set_url("example.com");
        session.crawl().await.unwrap();

        assert!(matches!(
            session.export_text(),
            Err(WebtotextError::MalformedResult(_))
        ));
    }
}
