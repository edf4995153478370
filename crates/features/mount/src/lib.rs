//! # Mount
//!
//! Places the empty feature-status panel into a host presentation surface
//! exactly once.
//!
//! A host either calls [`mount`] directly, or opts in to automatic mounting
//! with [`install`], which defers the mount to the host's one-shot
//! content-ready signal. Mounting checks for an existing element with the
//! panel id first, so repeated calls never stack panels.
//!
//! Two surfaces ship with the crate:
//!
//! * [`Document`]: an in-memory host with a root, element ids, and a
//!   content-ready signal fired by the caller.
//! * [`HtmlPage`]: a static HTML document string; the root is `<body>`.
//!
//! ```rust
//! use featdeck_mount::{Document, MountOutcome, install, mount};
//!
//! let mut doc = Document::new();
//! assert!(install(&mut doc));
//! doc.fire_content_ready();
//! assert_eq!(mount(&mut doc), MountOutcome::AlreadyMounted);
//! assert_eq!(doc.children().len(), 1);
//! ```

mod document;
mod html;
mod surface;

pub use crate::document::Document;
pub use crate::html::HtmlPage;
pub use crate::surface::{ContentReady, Surface};

use featdeck_domain::constants::PANEL_ELEMENT_ID;
use featdeck_render::PanelItem;
use std::fmt;
use tracing::debug;

/// What a [`mount`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountOutcome {
    /// The panel was appended to the root.
    Mounted,
    /// An element with the panel id already exists; nothing changed.
    AlreadyMounted,
    /// The surface has no presentation root.
    NoRoot,
}

impl MountOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mounted => "mounted",
            Self::AlreadyMounted => "already-mounted",
            Self::NoRoot => "no-root",
        }
    }

    /// `true` when a panel is present on the surface after the call.
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Mounted | Self::AlreadyMounted)
    }
}

impl fmt::Display for MountOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Appends the empty panel to the surface root unless one is already there.
pub fn mount<S: Surface + ?Sized>(surface: &mut S) -> MountOutcome {
    if !surface.has_root() {
        debug!(id = PANEL_ELEMENT_ID, "surface has no root, panel not mounted");
        return MountOutcome::NoRoot;
    }
    if surface.contains_element(PANEL_ELEMENT_ID) {
        debug!(id = PANEL_ELEMENT_ID, "panel already present");
        return MountOutcome::AlreadyMounted;
    }

    let markup = featdeck_render::panel(std::iter::empty::<PanelItem<'_>>());
    surface.append_to_root(&markup);
    debug!(id = PANEL_ELEMENT_ID, bytes = markup.len(), "panel mounted");
    MountOutcome::Mounted
}

/// Registers a one-shot content-ready callback that mounts the panel.
///
/// Returns `false`, registering nothing, when the surface has no root.
pub fn install<S: Surface + ?Sized>(surface: &mut S) -> bool {
    if !surface.has_root() {
        debug!("surface has no root, auto-mount not installed");
        return false;
    }
    surface.on_content_ready(Box::new(|surface: &mut dyn Surface| {
        mount(surface);
    }));
    debug!("auto-mount installed");
    true
}
