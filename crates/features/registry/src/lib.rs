//! # Feature Registry
//!
//! The dashboard's feature-status table as an immutable, process-wide constant,
//! keyed by group name and then feature name.
//!
//! Lookups are total: an unknown group, an unknown feature, or a malformed path
//! resolves to `None`. [`Registry::require`] is the one strict accessor, for
//! callers that want to report typos instead of rendering nothing.
//!
//! ```rust
//! use featdeck_registry::REGISTRY;
//!
//! let login = REGISTRY.lookup("auth.emailLogin").unwrap();
//! assert!(login.ready);
//! assert!(REGISTRY.lookup("auth.doesNotExist").is_none());
//! ```

mod error;
mod path;
mod progress;
mod table;

pub use crate::error::{RegistryError, RegistryErrorExt};
pub use crate::path::FeaturePath;
pub use crate::progress::{GroupProgress, Progress};
pub use featdeck_domain::{FeatureDescriptor, Status, StatusSet};

use serde::Serialize;
use tracing::debug;

/// The dashboard table.
pub static REGISTRY: Registry = Registry::new(table::GROUPS);

/// A named feature and its descriptor.
#[derive(Debug)]
pub struct Feature {
    pub name: &'static str,
    pub descriptor: FeatureDescriptor,
}

impl Feature {
    #[must_use]
    pub const fn new(name: &'static str, descriptor: FeatureDescriptor) -> Self {
        Self { name, descriptor }
    }
}

/// An ordered list of features sharing a group name.
#[derive(Debug)]
pub struct FeatureGroup {
    pub name: &'static str,
    pub features: &'static [Feature],
}

impl FeatureGroup {
    #[must_use]
    pub fn feature(&self, name: &str) -> Option<&'static FeatureDescriptor> {
        self.features.iter().find(|f| f.name == name).map(|f| &f.descriptor)
    }
}

/// One row of the flattened table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Entry {
    pub group: &'static str,
    pub feature: &'static str,
    #[serde(flatten)]
    pub descriptor: &'static FeatureDescriptor,
}

impl Entry {
    /// The dotted lookup path of this entry.
    #[must_use]
    pub const fn path(&self) -> FeaturePath<'static> {
        FeaturePath { group: self.group, feature: self.feature }
    }
}

/// Read-only view over a static two-level feature table.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    groups: &'static [FeatureGroup],
}

impl Registry {
    #[must_use]
    pub const fn new(groups: &'static [FeatureGroup]) -> Self {
        Self { groups }
    }

    /// Resolves a dotted `group.feature` path.
    ///
    /// Only two non-empty segments can resolve; anything else is `None`.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&'static FeatureDescriptor> {
        let Some(parsed) = FeaturePath::parse(path) else {
            debug!(path, "malformed feature path");
            return None;
        };
        let found = self.get(parsed.group, parsed.feature);
        if found.is_none() {
            debug!(path, "feature path did not resolve");
        }
        found
    }

    /// Two-key accessor behind [`Self::lookup`].
    #[must_use]
    pub fn get(&self, group: &str, feature: &str) -> Option<&'static FeatureDescriptor> {
        self.group(group)?.feature(feature)
    }

    /// Like [`Self::lookup`], but says which part of the path was wrong.
    ///
    /// # Errors
    /// * [`RegistryError::InvalidPath`] when `path` is not `group.feature`.
    /// * [`RegistryError::UnknownGroup`] / [`RegistryError::UnknownFeature`] when a
    ///   segment is not in the table.
    pub fn require(&self, path: &str) -> Result<&'static FeatureDescriptor, RegistryError> {
        let parsed = FeaturePath::parse(path).ok_or_else(|| RegistryError::InvalidPath {
            message: format!("'{path}' is not of the form group.feature").into(),
            context: None,
        })?;

        let group = self.group(parsed.group).ok_or_else(|| RegistryError::UnknownGroup {
            message: parsed.group.to_owned().into(),
            context: None,
        })?;

        group.feature(parsed.feature).ok_or_else(|| RegistryError::UnknownFeature {
            message: parsed.to_string().into(),
            context: None,
        })
    }

    #[must_use]
    pub fn group(&self, name: &str) -> Option<&'static FeatureGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    #[must_use]
    pub const fn groups(&self) -> &'static [FeatureGroup] {
        self.groups
    }

    /// Every feature in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = Entry> + use<> {
        let groups = self.groups;
        groups.iter().flat_map(|group| {
            group.features.iter().map(move |f| Entry {
                group: group.name,
                feature: f.name,
                descriptor: &f.descriptor,
            })
        })
    }

    /// Entries whose status is in `statuses`, in declaration order.
    pub fn select(&self, statuses: StatusSet) -> impl Iterator<Item = Entry> + use<> {
        self.entries().filter(move |entry| statuses.matches(&entry.descriptor.status))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.features.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.features.is_empty())
    }

    /// Per-group readiness counts.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::new(self.groups.iter().map(GroupProgress::of).collect())
    }
}

impl Default for Registry {
    fn default() -> Self {
        REGISTRY
    }
}
