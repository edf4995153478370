//! Typed view-models. Everything a template prints is decided here.

use crate::palette::{StatusColor, status_color};
use featdeck_domain::{FeatureDescriptor, Status};
use std::borrow::Cow;
use std::fmt;

/// Tooltip used when a descriptor has neither `api` nor `note`.
pub const DEFAULT_TOOLTIP: &str = "Feature status";
pub const READY_LABEL: &str = "Ready";

const READY_TITLE: &str = "Feature ready";
const PENDING_TITLE: &str = "In development";

/// Two-state glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Ready,
    Pending,
}

impl Icon {
    #[must_use]
    pub const fn for_ready(ready: bool) -> Self {
        if ready { Self::Ready } else { Self::Pending }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Ready => "✓",
            Self::Pending => "⏳",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Everything a badge shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    pub icon: Icon,
    pub label: Cow<'static, str>,
    pub color: StatusColor,
    pub tooltip: String,
}

impl BadgeView {
    #[must_use]
    pub fn from_descriptor(descriptor: &FeatureDescriptor) -> Self {
        Self {
            icon: Icon::for_ready(descriptor.ready),
            label: status_label(descriptor),
            color: status_color(&descriptor.status),
            tooltip: descriptor.reference().unwrap_or(DEFAULT_TOOLTIP).to_owned(),
        }
    }
}

/// The glyph-only indicator. Only readiness matters: green check or orange hourglass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorView {
    pub icon: Icon,
    pub color: StatusColor,
    pub title: &'static str,
}

impl IndicatorView {
    #[must_use]
    pub const fn from_descriptor(descriptor: &FeatureDescriptor) -> Self {
        if descriptor.ready {
            Self { icon: Icon::Ready, color: StatusColor::Green, title: READY_TITLE }
        } else {
            Self { icon: Icon::Pending, color: StatusColor::Orange, title: PENDING_TITLE }
        }
    }
}

/// One labeled badge row of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub label: String,
    pub badge: BadgeView,
}

/// The floating panel: resolved rows only, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub element_id: &'static str,
    pub rows: Vec<PanelRow>,
}

/// `Ready` for usable features, otherwise the capitalized status name.
#[must_use]
pub fn status_label(descriptor: &FeatureDescriptor) -> Cow<'static, str> {
    if descriptor.ready {
        return Cow::Borrowed(READY_LABEL);
    }
    match &descriptor.status {
        Status::Production => Cow::Borrowed("Production"),
        Status::Testing => Cow::Borrowed("Testing"),
        Status::Development => Cow::Borrowed("Development"),
        Status::Planned => Cow::Borrowed("Planned"),
        Status::Unknown(raw) => Cow::Owned(capitalize(raw)),
    }
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}
