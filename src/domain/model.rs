use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::utils::error::BumpError;

/// A three-component version number in `major.minor.patch` form.
///
/// Exactly three dot-separated non-negative integers; anything else is
/// rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl std::str::FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(BumpError::InvalidVersionFormat {
                value: s.to_string(),
            });
        }

        let mut components = [0u32; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| BumpError::InvalidVersionFormat {
                value: s.to_string(),
            })?;
        }

        Ok(Version::new(components[0], components[1], components[2]))
    }
}

/// Which descriptor holds the authoritative current version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Authority {
    /// pom.xml is the source of truth; Chart.yaml follows.
    #[default]
    Primary,
    /// Chart.yaml is the source of truth; pom.xml follows.
    Secondary,
}

/// Where the resolved version text lives inside pom.xml.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSlot {
    /// Literal text of `/project/version`.
    ProjectVersion,
    /// Text of `/project/properties/<name>`, referenced from
    /// `/project/version` as `${name}`.
    Property(String),
}

/// Which descriptor the current version was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOrigin {
    Primary,
    Secondary,
}

/// Loaded pom.xml, with the slot the resolved version lives in.
#[derive(Debug, Clone)]
pub struct PomSource {
    pub path: PathBuf,
    pub content: String,
    pub slot: VersionSlot,
    /// Resolved literal version text (after `${...}` dereferencing).
    pub current: String,
}

/// Loaded Chart.yaml.
#[derive(Debug, Clone)]
pub struct ChartSource {
    pub path: PathBuf,
    pub content: String,
}

/// Everything the extract stage learned about the project, carried forward
/// to the later stages.
#[derive(Debug, Clone)]
pub struct VersionSource {
    pub current: String,
    pub origin: VersionOrigin,
    pub pom: Option<PomSource>,
    pub chart: Option<ChartSource>,
}

/// Output of the transform stage: the increment to apply, plus the
/// descriptors it applies to.
#[derive(Debug, Clone)]
pub struct BumpPlan {
    pub previous: Version,
    pub next: Version,
    pub source: VersionSource,
}

/// What a run actually did. The `*_updated` flags are also set on a dry
/// run, where they mean "would have been rewritten".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BumpOutcome {
    pub previous: String,
    pub next: String,
    pub primary_updated: bool,
    pub secondary_updated: bool,
    pub dry_run: bool,
}
