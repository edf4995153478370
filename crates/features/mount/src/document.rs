use crate::surface::{ContentReady, Surface, markup_has_id};
use std::fmt;
use tracing::debug;

/// In-memory host: an optional root holding child markup, plus a one-shot
/// content-ready signal the owner fires.
pub struct Document {
    root: Option<Vec<String>>,
    content_ready: bool,
    pending: Vec<ContentReady>,
}

impl Document {
    /// A document with an empty root.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: Some(Vec::new()), content_ready: false, pending: Vec::new() }
    }

    /// A document without a presentation root.
    #[must_use]
    pub const fn headless() -> Self {
        Self { root: None, content_ready: false, pending: Vec::new() }
    }

    /// Adds a child to the root; ignored on a headless document.
    #[must_use]
    pub fn with_child(mut self, markup: impl Into<String>) -> Self {
        if let Some(children) = self.root.as_mut() {
            children.push(markup.into());
        }
        self
    }

    /// Root children in document order; empty when headless.
    #[must_use]
    pub fn children(&self) -> &[String] {
        self.root.as_deref().unwrap_or_default()
    }

    /// Number of root children carrying `id`.
    #[must_use]
    pub fn count_elements(&self, id: &str) -> usize {
        self.children().iter().filter(|child| markup_has_id(child, id)).count()
    }

    #[must_use]
    pub const fn is_content_ready(&self) -> bool {
        self.content_ready
    }

    #[must_use]
    pub fn pending_callbacks(&self) -> usize {
        self.pending.len()
    }

    /// Fires the content-ready signal. Only the first call runs callbacks.
    pub fn fire_content_ready(&mut self) {
        if self.content_ready {
            debug!("content-ready already fired");
            return;
        }
        self.content_ready = true;

        let pending = std::mem::take(&mut self.pending);
        debug!(callbacks = pending.len(), "content ready");
        for callback in pending {
            callback(&mut *self);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root)
            .field("content_ready", &self.content_ready)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl Surface for Document {
    fn has_root(&self) -> bool {
        self.root.is_some()
    }

    fn contains_element(&self, id: &str) -> bool {
        self.count_elements(id) > 0
    }

    fn append_to_root(&mut self, markup: &str) {
        match self.root.as_mut() {
            Some(children) => children.push(markup.to_owned()),
            None => debug!("append on headless document ignored"),
        }
    }

    fn on_content_ready(&mut self, callback: ContentReady) {
        if self.content_ready {
            callback(self);
        } else {
            self.pending.push(callback);
        }
    }
}
