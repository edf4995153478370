use crate::surface::{ContentReady, Surface, markup_has_id};
use tracing::debug;

const BODY_CLOSE: &str = "</body>";
const HTML_CLOSE: &str = "</html>";

/// A static HTML document. The root is `<body>`; appended markup lands right
/// before the closing `</body>` tag.
///
/// The body of a full document may be implied (no literal `</body>`). Markup
/// then goes before `</html>`, or at the very end. A fragment with no
/// doctype, `<html>` or `<body>` has no root.
///
/// A static page is already loaded, so content-ready callbacks run as soon as
/// they are registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlPage {
    html: String,
}

impl HtmlPage {
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.html
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.html
    }

    /// Byte offset where root children are appended, matched case-insensitively.
    fn insertion_point(&self) -> Option<usize> {
        // ASCII lowercasing keeps byte offsets stable.
        let lower = self.html.to_ascii_lowercase();
        lower
            .rfind(BODY_CLOSE)
            .or_else(|| lower.rfind(HTML_CLOSE))
            .or_else(|| is_document(&lower).then_some(lower.len()))
    }
}

fn is_document(lower: &str) -> bool {
    let head = lower.trim_start();
    head.starts_with("<!doctype") || head.starts_with("<html") || head.starts_with("<body")
}

impl From<String> for HtmlPage {
    fn from(html: String) -> Self {
        Self::new(html)
    }
}

impl Surface for HtmlPage {
    fn has_root(&self) -> bool {
        self.insertion_point().is_some()
    }

    fn contains_element(&self, id: &str) -> bool {
        markup_has_id(&self.html, id)
    }

    fn append_to_root(&mut self, markup: &str) {
        match self.insertion_point() {
            Some(at) => self.html.insert_str(at, markup),
            None => debug!("page has no body, markup not inserted"),
        }
    }

    fn on_content_ready(&mut self, callback: ContentReady) {
        callback(self);
    }
}
