use crate::error::{ReleaseError, Result};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from a release tag (e.g., "v1.2.3" -> Version(1,2,3))
    ///
    /// A single leading 'v' or 'V' is stripped. Missing trailing segments
    /// default to zero, so "v2" parses as 2.0.0 and "v2.1" as 2.1.0. Tags
    /// with more than three segments or non-numeric segments are rejected.
    pub fn parse(tag: &str) -> Result<Self> {
        let clean_tag = tag
            .strip_prefix('v')
            .or_else(|| tag.strip_prefix('V'))
            .unwrap_or(tag);

        let parts: Vec<&str> = clean_tag.split('.').collect();
        if parts.len() > 3 {
            return Err(ReleaseError::tag_parse(format!(
                "Invalid version format: '{}' - expected at most X.Y.Z",
                tag
            )));
        }

        let mut segments = [0u64; 3];
        for (i, part) in parts.iter().enumerate() {
            segments[i] = part.parse::<u64>().map_err(|_| {
                ReleaseError::tag_parse(format!(
                    "Invalid version segment '{}' in tag '{}'",
                    part, tag
                ))
            })?;
        }

        Ok(Version {
            major: segments[0],
            minor: segments[1],
            patch: segments[2],
        })
    }

    /// Bump version according to bump type
    pub fn bump(&self, bump_type: &VersionBump) -> Self {
        match bump_type {
            VersionBump::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }

    /// Render as a release tag with the 'v' prefix (e.g., "v1.2.3")
    pub fn tag(&self) -> String {
        format!("v{}", self)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}
