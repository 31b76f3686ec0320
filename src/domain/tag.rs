use regex::Regex;

use crate::domain::version::Version;
use crate::error::{ReleaseError, Result};

/// Grammar for release tags of one tagged ecosystem
///
/// Tags have the shape `<prefix>/v<major>.<minor>.<patch>`, e.g.
/// `server-go/v1.2.3`. The pattern is an explicit anchored regex rather than
/// ad hoc line scanning so that malformed tags surface as parse failures.
#[derive(Debug, Clone)]
pub struct TagPattern {
    prefix: String,
    regex: Regex,
}

impl TagPattern {
    /// Build a pattern for the given ecosystem prefix
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(ReleaseError::tag_parse("tag prefix must not be empty"));
        }

        let escaped = regex::escape(&prefix);
        let regex = Regex::new(&format!(r"^{}/v(\d+)\.(\d+)\.(\d+)$", escaped))
            .map_err(|e| ReleaseError::tag_parse(format!("invalid tag pattern: {}", e)))?;

        Ok(TagPattern { prefix, regex })
    }

    /// The ecosystem prefix this pattern matches
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Parse a tag into its version triple
    ///
    /// # Arguments
    /// * `tag` - Full tag name (e.g., "server-go/v1.2.3")
    ///
    /// # Returns
    /// * `Ok(Version)` - The parsed version
    /// * `Err(TagParse)` - If the tag does not match `<prefix>/vX.Y.Z`
    pub fn parse(&self, tag: &str) -> Result<Version> {
        let captures = self.regex.captures(tag).ok_or_else(|| {
            ReleaseError::tag_parse(format!(
                "tag '{}' does not match '{}/vX.Y.Z'",
                tag, self.prefix
            ))
        })?;

        // Captures are \d+ so parsing only fails on overflow
        let component = |idx: usize| -> Result<u32> {
            captures[idx].parse::<u32>().map_err(|_| {
                ReleaseError::tag_parse(format!(
                    "version component '{}' in tag '{}' is out of range",
                    &captures[idx], tag
                ))
            })
        };

        Ok(Version::new(component(1)?, component(2)?, component(3)?))
    }

    /// Format a version as a full tag name
    pub fn format(&self, version: &Version) -> String {
        format!("{}/v{}", self.prefix, version)
    }

    /// Whether a tag matches this pattern
    pub fn matches(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_tag() {
        let pattern = TagPattern::new("server-go").unwrap();
        let version = pattern.parse("server-go/v1.2.3").unwrap();
        assert_eq!(version, Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_rejects_wrong_prefix() {
        let pattern = TagPattern::new("server-go").unwrap();
        let err = pattern.parse("client-js/v1.2.3").unwrap_err();
        assert!(matches!(err, ReleaseError::TagParse(_)));
    }

    #[test]
    fn test_parse_rejects_missing_v() {
        let pattern = TagPattern::new("server-go").unwrap();
        assert!(pattern.parse("server-go/1.2.3").is_err());
    }

    #[test]
    fn test_parse_rejects_partial_version() {
        let pattern = TagPattern::new("server-go").unwrap();
        assert!(pattern.parse("server-go/v1.2").is_err());
        assert!(pattern.parse("server-go/v1.2.3.4").is_err());
    }

    #[test]
    fn test_parse_rejects_trailing_garbage() {
        let pattern = TagPattern::new("server-go").unwrap();
        assert!(pattern.parse("server-go/v1.2.3-rc1").is_err());
    }

    #[test]
    fn test_parse_prefix_with_regex_metacharacters() {
        let pattern = TagPattern::new("pkg.go").unwrap();
        assert!(pattern.parse("pkg.go/v1.0.0").is_ok());
        // The dot must be literal, not a wildcard
        assert!(pattern.parse("pkgXgo/v1.0.0").is_err());
    }

    #[test]
    fn test_format_round_trip() {
        let pattern = TagPattern::new("server-go").unwrap();
        let tag = pattern.format(&Version::new(1, 3, 0));
        assert_eq!(tag, "server-go/v1.3.0");
        assert_eq!(pattern.parse(&tag).unwrap(), Version::new(1, 3, 0));
    }

    #[test]
    fn test_matches() {
        let pattern = TagPattern::new("server-go").unwrap();
        assert!(pattern.matches("server-go/v0.1.0"));
        assert!(!pattern.matches("server-go/latest"));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert!(TagPattern::new("").is_err());
    }
}
