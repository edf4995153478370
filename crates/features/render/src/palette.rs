use featdeck_domain::Status;
use std::fmt;

/// Display color tokens used by badges and indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    Green,
    Orange,
    Blue,
    Gray,
}

impl StatusColor {
    /// CSS hex value; badges append a two-digit alpha to it for tints.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#4CAF50",
            Self::Orange => "#FF9800",
            Self::Blue => "#2196F3",
            Self::Gray => "#9E9E9E",
        }
    }
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// Color for a lifecycle stage. Unknown stages share `planned`'s gray.
#[must_use]
pub const fn status_color(status: &Status) -> StatusColor {
    match status {
        Status::Production => StatusColor::Green,
        Status::Testing => StatusColor::Orange,
        Status::Development => StatusColor::Blue,
        Status::Planned | Status::Unknown(_) => StatusColor::Gray,
    }
}
