/// Deferred work run once when the host reports its content is ready.
pub type ContentReady = Box<dyn FnOnce(&mut dyn Surface)>;

/// A presentation host the panel can be mounted into.
pub trait Surface {
    /// Whether there is a root to append to.
    fn has_root(&self) -> bool;

    /// Whether an element with this id is already present.
    fn contains_element(&self, id: &str) -> bool;

    /// Appends `markup` as the last child of the root.
    fn append_to_root(&mut self, markup: &str);

    /// Registers `callback` for the content-ready signal.
    ///
    /// Each callback runs at most once. Hosts whose content is already ready
    /// run it immediately.
    fn on_content_ready(&mut self, callback: ContentReady);
}

/// Matches `id="value"` and `id='value'` attributes in raw markup.
pub(crate) fn markup_has_id(markup: &str, id: &str) -> bool {
    markup.contains(&format!("id=\"{id}\"")) || markup.contains(&format!("id='{id}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_attribute_quotes() {
        assert!(markup_has_id(r#"<div id="panel"></div>"#, "panel"));
        assert!(markup_has_id("<div id='panel'></div>", "panel"));
        assert!(!markup_has_id(r#"<div id="panel2"></div>"#, "panel"));
        assert!(!markup_has_id(r#"<div class="panel"></div>"#, "panel"));
    }
}
