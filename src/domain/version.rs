use std::fmt;
use std::str::FromStr;

use crate::error::{ReleaseError, Result};

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Bump version according to the update kind
    ///
    /// Increments the named component and resets lower components to 0:
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    pub fn bump(&self, kind: UpdateKind) -> Self {
        match kind {
            UpdateKind::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            UpdateKind::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            UpdateKind::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which version component a release advances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    Major,
    Minor,
    Patch,
}

impl UpdateKind {
    /// The lowercase name used on the CLI and by the manifest version command
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateKind::Major => "major",
            UpdateKind::Minor => "minor",
            UpdateKind::Patch => "patch",
        }
    }
}

impl FromStr for UpdateKind {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(UpdateKind::Major),
            "minor" => Ok(UpdateKind::Minor),
            "patch" => Ok(UpdateKind::Patch),
            other => Err(ReleaseError::invalid_argument(format!(
                "update must be 'major', 'minor', or 'patch', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
