//! Editor bridge
//!
//! The display widget is an opaque text buffer injected behind the
//! [`TextBuffer`] trait, so the workflow stays testable without a real
//! webview. Rendering always sanitizes first and replaces the whole
//! buffer in one transaction.

use crate::types::CrawlResult;

/// An opaque text-buffer display widget
///
/// Mirrors the document API of an embedded code editor: a length, a
/// verbatim read-back, and range replacement. Implementations only need
/// `replace_range`; whole-buffer replacement is expressed through it so
/// the update stays a single transaction.
pub trait TextBuffer {
    /// Current document length in bytes
    fn len(&self) -> usize;

    /// Whether the buffer is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The full current text, verbatim
    ///
    /// Exports read through this, so any user edits to the displayed
    /// text are honored.
    fn read_all(&self) -> String;

    /// Replace the byte range `start..end` with `text`
    fn replace_range(&mut self, start: usize, end: usize, text: &str);

    /// Replace the entire contents in one range operation spanning the
    /// buffer's full current length
    fn replace_all(&mut self, text: &str) {
        let end = self.len();
        self.replace_range(0, end, text);
    }
}

/// In-memory [`TextBuffer`] used by the session
///
/// The embedding UI mirrors webview edits into it through the session's
/// `set_editor_text`, keeping this copy authoritative for exports.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    text: String,
}

impl EditorBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextBuffer for EditorBuffer {
    fn len(&self) -> usize {
        self.text.len()
    }

    fn read_all(&self) -> String {
        self.text.clone()
    }

    fn replace_range(&mut self, start: usize, end: usize, text: &str) {
        self.text.replace_range(start..end, text);
    }
}

/// Sanitize text before it reaches the display widget
///
/// Opaque pure function escaping embedded markup (`&`, `<`, `>`), so a
/// crawled page cannot smuggle tags into the editor pane.
pub fn sanitize(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Render a crawl result into the display buffer
///
/// Serializes the result to indented JSON, sanitizes it, and replaces
/// the buffer's entire contents atomically.
pub fn render_result(result: &CrawlResult, buffer: &mut impl TextBuffer) {
    let pretty = result.to_pretty();
    buffer.replace_all(&sanitize(&pretty));
}
