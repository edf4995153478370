//! # Render
//!
//! Markup for feature-status data: inline badges, glyph indicators, and the
//! floating summary panel.
//!
//! Rendering is split in two steps. [`view`] turns descriptors into typed
//! view-models (icon, label, color, tooltip); `askama` templates then print those
//! models. Every entry point is total: unresolved paths, missing fields, and
//! unknown statuses produce an empty or default rendering, never an error.
//!
//! ```rust
//! use featdeck_render::{badge, compact_indicator, panel};
//! use featdeck_registry::REGISTRY;
//!
//! let login = REGISTRY.lookup("auth.emailLogin").unwrap();
//! assert!(badge(login).contains("Ready"));
//! assert!(compact_indicator("auth.nope").is_empty());
//! assert!(panel([("Login", "auth.emailLogin")]).contains("featureStatusPanel"));
//! ```

mod palette;
mod templates;
pub mod view;

pub use crate::palette::{StatusColor, status_color};
pub use crate::view::{BadgeView, Icon, IndicatorView, PanelRow, PanelView};

use crate::templates::{
    BadgeTemplate, IndicatorTemplate, InlineTemplate, PanelTemplate, RenderedRow, render_or_empty,
};
use featdeck_domain::FeatureDescriptor;
use featdeck_domain::constants::PANEL_ELEMENT_ID;
use featdeck_registry::{REGISTRY, Registry};
use tracing::debug;

/// One requested panel row: a bare path (shown as its own label) or a labeled path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelItem<'a> {
    Path(&'a str),
    Labeled { label: &'a str, path: &'a str },
}

impl<'a> PanelItem<'a> {
    #[must_use]
    pub const fn label(&self) -> &'a str {
        match *self {
            Self::Path(path) => path,
            Self::Labeled { label, .. } => label,
        }
    }

    #[must_use]
    pub const fn path(&self) -> &'a str {
        match *self {
            Self::Path(path) | Self::Labeled { path, .. } => path,
        }
    }
}

impl<'a> From<&'a str> for PanelItem<'a> {
    fn from(path: &'a str) -> Self {
        Self::Path(path)
    }
}

impl<'a> From<&PanelItem<'a>> for PanelItem<'a> {
    fn from(item: &PanelItem<'a>) -> Self {
        *item
    }
}

impl<'a> From<&'a String> for PanelItem<'a> {
    fn from(path: &'a String) -> Self {
        Self::Path(path)
    }
}

impl<'a> From<(&'a str, &'a str)> for PanelItem<'a> {
    fn from((label, path): (&'a str, &'a str)) -> Self {
        Self::Labeled { label, path }
    }
}

impl<'a> From<[&'a str; 2]> for PanelItem<'a> {
    fn from([label, path]: [&'a str; 2]) -> Self {
        Self::Labeled { label, path }
    }
}

/// Renders against a specific registry. The free functions use [`REGISTRY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    registry: Registry,
}

impl Renderer {
    #[must_use]
    pub const fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Full badge for `path`; empty when the path does not resolve.
    #[must_use]
    pub fn badge_for(&self, path: &str) -> String {
        self.registry.lookup(path).map_or_else(String::new, badge)
    }

    /// Glyph-only indicator for `path`; empty when the path does not resolve.
    #[must_use]
    pub fn compact_indicator(&self, path: &str) -> String {
        self.registry.lookup(path).map_or_else(String::new, |descriptor| {
            let view = IndicatorView::from_descriptor(descriptor);
            render_or_empty(&IndicatorTemplate { view: &view })
        })
    }

    /// Badge for `path` wrapped in the `feature-inline-indicator` span; empty when unresolved.
    #[must_use]
    pub fn inline_indicator(&self, path: &str) -> String {
        self.registry.lookup(path).map_or_else(String::new, |descriptor| {
            render_or_empty(&InlineTemplate { badge: badge(descriptor) })
        })
    }

    /// Resolves `items` into panel rows, dropping the ones that do not resolve.
    #[must_use]
    pub fn panel_view<'a, I>(&self, items: I) -> PanelView
    where
        I: IntoIterator,
        I::Item: Into<PanelItem<'a>>,
    {
        let rows = items
            .into_iter()
            .map(Into::into)
            .filter_map(|item: PanelItem<'a>| {
                let Some(descriptor) = self.registry.lookup(item.path()) else {
                    debug!(path = item.path(), "skipping unresolved panel item");
                    return None;
                };
                Some(PanelRow {
                    label: item.label().to_owned(),
                    badge: BadgeView::from_descriptor(descriptor),
                })
            })
            .collect();

        PanelView { element_id: PANEL_ELEMENT_ID, rows }
    }

    /// The floating panel: style block, header with dismiss control, rows, footer.
    #[must_use]
    pub fn panel<'a, I>(&self, items: I) -> String
    where
        I: IntoIterator,
        I::Item: Into<PanelItem<'a>>,
    {
        render_panel(&self.panel_view(items))
    }
}

/// Inline badge for a descriptor.
#[must_use]
pub fn badge(descriptor: &FeatureDescriptor) -> String {
    render_badge(&BadgeView::from_descriptor(descriptor))
}

#[must_use]
pub fn render_badge(view: &BadgeView) -> String {
    render_or_empty(&BadgeTemplate { view })
}

#[must_use]
pub fn render_panel(view: &PanelView) -> String {
    let rows = view
        .rows
        .iter()
        .map(|row| RenderedRow { label: &row.label, badge: render_badge(&row.badge) })
        .collect();
    render_or_empty(&PanelTemplate { element_id: view.element_id, rows })
}

/// See [`Renderer::badge_for`].
#[must_use]
pub fn badge_for(path: &str) -> String {
    Renderer::new(REGISTRY).badge_for(path)
}

/// See [`Renderer::compact_indicator`].
#[must_use]
pub fn compact_indicator(path: &str) -> String {
    Renderer::new(REGISTRY).compact_indicator(path)
}

/// See [`Renderer::inline_indicator`].
#[must_use]
pub fn inline_indicator(path: &str) -> String {
    Renderer::new(REGISTRY).inline_indicator(path)
}

/// See [`Renderer::panel`].
#[must_use]
pub fn panel<'a, I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Into<PanelItem<'a>>,
{
    Renderer::new(REGISTRY).panel(items)
}
