//! Loads the addon index file that seeds [`InMemoryAddonStorage`].
//!
//! ```json
//! {
//!   "addons": [ { "id": "...", "name": "...", "version": "1.0.0", ... } ],
//!   "namespaces": { "stage": [ ... ] }
//! }
//! ```
//!
//! `addons` are cluster-wide; each `namespaces` entry is visible only in
//! that namespace.

use helm_broker_domain::{Addon, AddonScope, DomainError};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::info;

use super::InMemoryAddonStorage;

#[derive(Debug, thiserror::Error)]
pub enum AddonIndexError {
    #[error("Failed to read addon index {0}: {1}")]
    Read(String, String),

    #[error("Failed to parse addon index: {0}")]
    Parse(String),

    #[error("Duplicate addon {id} in scope {scope}")]
    DuplicateAddon { scope: String, id: String },

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddonIndex {
    #[serde(default)]
    pub addons: Vec<Addon>,
    #[serde(default)]
    pub namespaces: BTreeMap<String, Vec<Addon>>,
}

impl AddonIndex {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AddonIndexError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AddonIndexError::Read(path.display().to_string(), e.to_string()))?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, AddonIndexError> {
        serde_json::from_str(json).map_err(|e| AddonIndexError::Parse(e.to_string()))
    }

    fn scoped(self) -> impl Iterator<Item = (AddonScope, Vec<Addon>)> {
        std::iter::once((AddonScope::ClusterWide, self.addons)).chain(
            self.namespaces
                .into_iter()
                .map(|(ns, addons)| (AddonScope::Namespaced(ns), addons)),
        )
    }

    /// Builds a storage holding every indexed addon, rejecting duplicate IDs per scope.
    pub fn into_storage(self) -> Result<InMemoryAddonStorage, AddonIndexError> {
        let storage = InMemoryAddonStorage::new();
        let mut total = 0usize;

        for (scope, addons) in self.scoped() {
            let mut seen = HashSet::with_capacity(addons.len());
            for addon in addons {
                if !seen.insert(addon.id.clone()) {
                    return Err(AddonIndexError::DuplicateAddon {
                        scope: scope.to_string(),
                        id: addon.id,
                    });
                }
                storage.upsert(scope.clone(), addon)?;
                total += 1;
            }
        }

        info!(addons = total, "Addon index loaded");
        Ok(storage)
    }
}
