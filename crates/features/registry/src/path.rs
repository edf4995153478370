use featdeck_domain::constants::PATH_SEPARATOR;
use std::fmt;

/// A parsed `group.feature` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeaturePath<'a> {
    pub group: &'a str,
    pub feature: &'a str,
}

impl<'a> FeaturePath<'a> {
    /// Splits `path` into its two segments.
    ///
    /// Returns `None` for a single segment, three or more segments, or any empty segment.
    #[must_use]
    pub fn parse(path: &'a str) -> Option<Self> {
        let (group, feature) = path.split_once(PATH_SEPARATOR)?;
        if group.is_empty() || feature.is_empty() || feature.contains(PATH_SEPARATOR) {
            return None;
        }
        Some(Self { group, feature })
    }
}

impl fmt::Display for FeaturePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{PATH_SEPARATOR}{}", self.group, self.feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_segments() {
        let path = FeaturePath::parse("auth.emailLogin").unwrap();
        assert_eq!(path.group, "auth");
        assert_eq!(path.feature, "emailLogin");
        assert_eq!(path.to_string(), "auth.emailLogin");
    }

    #[test]
    fn rejects_other_shapes() {
        for raw in ["", "auth", "auth.", ".emailLogin", "auth.emailLogin.ready", "."] {
            assert!(FeaturePath::parse(raw).is_none(), "{raw:?} should not parse");
        }
    }
}
