use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Readiness record for one feature.
///
/// `api` points at the backend endpoint or integration backing the feature;
/// `note` describes work that has no endpoint yet. Either may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    #[serde(default)]
    pub ready: bool,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<Cow<'static, str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Cow<'static, str>>,
}

impl FeatureDescriptor {
    #[must_use]
    pub const fn new(ready: bool, status: Status) -> Self {
        Self { ready, status, api: None, note: None }
    }

    /// A usable feature backed by `api`.
    #[must_use]
    pub const fn live(status: Status, api: &'static str) -> Self {
        Self { ready: true, status, api: Some(Cow::Borrowed(api)), note: None }
    }

    /// A feature that is not usable yet, described by `note`.
    #[must_use]
    pub const fn upcoming(status: Status, note: &'static str) -> Self {
        Self { ready: false, status, api: None, note: Some(Cow::Borrowed(note)) }
    }

    #[must_use]
    pub fn with_api(mut self, api: impl Into<Cow<'static, str>>) -> Self {
        self.api = Some(api.into());
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<Cow<'static, str>>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The most specific reference text: `api`, then `note`. Empty strings count as absent.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        [self.api.as_deref(), self.note.as_deref()].into_iter().flatten().find(|s| !s.is_empty())
    }
}
