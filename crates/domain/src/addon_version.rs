use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Semantic version of an addon (`MAJOR.MINOR.PATCH[-PRE][+BUILD]`).
///
/// A single leading `v` is accepted on input and dropped on output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AddonVersion(semver::Version);

impl AddonVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(semver::Version::new(major, minor, patch))
    }

    pub fn as_semver(&self) -> &semver::Version {
        &self.0
    }
}

impl FromStr for AddonVersion {
    type Err = DomainError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let raw = input.strip_prefix('v').unwrap_or(input);
        semver::Version::parse(raw)
            .map(Self)
            .map_err(|e| DomainError::InvalidAddonVersion {
                version: input.to_string(),
                reason: e.to_string(),
            })
    }
}

impl From<semver::Version> for AddonVersion {
    fn from(version: semver::Version) -> Self {
        Self(version)
    }
}

impl fmt::Display for AddonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for AddonVersion {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AddonVersion> for String {
    fn from(version: AddonVersion) -> Self {
        version.to_string()
    }
}
