//! Facade crate for `FeatDeck`.
//! Re-exports the registry, the renderers and the mount API behind one import.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use featdeck::{Document, REGISTRY, badge, compact_indicator, mount};
//!
//! let html = badge(REGISTRY.lookup("export.exportPDF").unwrap());
//! assert!(html.contains("Ready"));
//! assert_eq!(compact_indicator("nope"), "");
//!
//! let mut doc = Document::new();
//! assert!(mount(&mut doc).is_present());
//! ```

pub use featdeck_domain as domain;
pub use featdeck_kernel as kernel;
pub use featdeck_mount as mounting;
pub use featdeck_registry as registry;
pub use featdeck_render as render;

pub use featdeck_domain::{FeatureDescriptor, Status, StatusSet};
pub use featdeck_mount::{Document, HtmlPage, MountOutcome, Surface, install, mount};
pub use featdeck_registry::{Entry, REGISTRY, Registry, RegistryError};
pub use featdeck_render::{
    PanelItem, Renderer, StatusColor, badge, badge_for, compact_indicator, inline_indicator, panel,
    status_color,
};

/// Resolves `group.feature` against [`REGISTRY`].
#[must_use]
pub fn lookup(path: &str) -> Option<&'static FeatureDescriptor> {
    REGISTRY.lookup(path)
}
