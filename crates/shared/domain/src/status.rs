use crate::constants::{DEVELOPMENT, PLANNED, PRODUCTION, TESTING};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Lifecycle stage of a feature.
///
/// Anything outside the four known stages is kept verbatim in [`Status::Unknown`]
/// so foreign descriptors still deserialize and render with default styling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Production,
    Testing,
    Development,
    Planned,
    Unknown(Cow<'static, str>),
}

impl Status {
    /// The wire name (`production`, `testing`, ...), or the raw value for unknowns.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Production => PRODUCTION,
            Self::Testing => TESTING,
            Self::Development => DEVELOPMENT,
            Self::Planned => PLANNED,
            Self::Unknown(raw) => raw.as_ref(),
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            PRODUCTION => Self::Production,
            TESTING => Self::Testing,
            DEVELOPMENT => Self::Development,
            PLANNED => Self::Planned,
            other => Self::Unknown(Cow::Owned(other.to_owned())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Cow::<'de, str>::deserialize(deserializer)?;
        Ok(Self::from(raw.as_ref()))
    }
}

bitflags! {
    /// A filter over lifecycle stages.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusSet: u8 {
        const PRODUCTION = 1 << 0;
        const TESTING = 1 << 1;
        const DEVELOPMENT = 1 << 2;
        const PLANNED = 1 << 3;
        /// Statuses outside the known four.
        const OTHER = 1 << 4;

        const ALL = Self::PRODUCTION.bits()
            | Self::TESTING.bits()
            | Self::DEVELOPMENT.bits()
            | Self::PLANNED.bits()
            | Self::OTHER.bits();
    }
}

impl StatusSet {
    /// Parses a comma separated list such as `testing,planned`.
    /// Unrecognized names contribute nothing.
    #[must_use]
    pub fn parse_list(list: &str) -> Self {
        list.split(',').map(str::trim).filter(|s| !s.is_empty()).map(Self::from).collect()
    }

    #[must_use]
    pub const fn matches(self, status: &Status) -> bool {
        let flag = match status {
            Status::Production => Self::PRODUCTION,
            Status::Testing => Self::TESTING,
            Status::Development => Self::DEVELOPMENT,
            Status::Planned => Self::PLANNED,
            Status::Unknown(_) => Self::OTHER,
        };
        self.contains(flag)
    }
}

impl From<&str> for StatusSet {
    fn from(s: &str) -> Self {
        match s {
            PRODUCTION => Self::PRODUCTION,
            TESTING => Self::TESTING,
            DEVELOPMENT => Self::DEVELOPMENT,
            PLANNED => Self::PLANNED,
            "other" => Self::OTHER,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl Default for StatusSet {
    fn default() -> Self {
        Self::ALL
    }
}
