use crate::view::{BadgeView, IndicatorView};
use askama::Template;
use tracing::warn;

#[derive(Debug, Template)]
#[template(path = "badge.html")]
pub(crate) struct BadgeTemplate<'a> {
    pub(crate) view: &'a BadgeView,
}

#[derive(Debug, Template)]
#[template(path = "indicator.html")]
pub(crate) struct IndicatorTemplate<'a> {
    pub(crate) view: &'a IndicatorView,
}

#[derive(Debug, Template)]
#[template(path = "inline.html")]
pub(crate) struct InlineTemplate {
    pub(crate) badge: String,
}

#[derive(Debug)]
pub(crate) struct RenderedRow<'a> {
    pub(crate) label: &'a str,
    pub(crate) badge: String,
}

#[derive(Debug, Template)]
#[template(path = "panel.html")]
pub(crate) struct PanelTemplate<'a> {
    pub(crate) element_id: &'a str,
    pub(crate) rows: Vec<RenderedRow<'a>>,
}

/// Renders `template`, or logs and yields an empty fragment.
pub(crate) fn render_or_empty<T: Template>(template: &T) -> String {
    template.render().unwrap_or_else(|e| {
        warn!(error = %e, "template rendering failed");
        String::new()
    })
}
