/// DOM id of the floating panel container. The mount presence check and the
/// dismiss button both target it.
pub const PANEL_ELEMENT_ID: &str = "featureStatusPanel";

/// Separator between group and feature in a lookup path (`auth.emailLogin`).
pub const PATH_SEPARATOR: char = '.';

pub const PRODUCTION: &str = "production";
pub const TESTING: &str = "testing";
pub const DEVELOPMENT: &str = "development";
pub const PLANNED: &str = "planned";
