use serde::{Deserialize, Serialize};

use crate::AddonScope;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Namespace the broker serves; unset means cluster-wide.
    #[serde(default)]
    pub namespace: Option<String>,

    /// JSON addon index loaded into the in-memory storage at startup.
    #[serde(default)]
    pub addons_file: Option<String>,
}

impl CatalogConfig {
    pub fn scope(&self) -> AddonScope {
        AddonScope::from_namespace(self.namespace.as_deref())
    }
}
