use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("context canceled")]
    Cancelled,

    #[error("Addon not found: {0}")]
    AddonNotFound(String),

    #[error("Invalid addon: {0}")]
    InvalidAddon(String),

    #[error("Invalid addon version '{version}': {reason}")]
    InvalidAddonVersion { version: String, reason: String },

    #[error("Invalid {schema_type} schema for plan {plan_id}: {reason}")]
    InvalidPlanSchema {
        plan_id: String,
        schema_type: String,
        reason: String,
    },

    #[error("Metadata encoding error: {0}")]
    MetadataEncoding(String),
}

/// Failure of a whole catalog build. Neither kind is retried by the broker.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("while finding all addons: {0}")]
    Retrieval(#[source] DomainError),

    #[error("while converting addon to service: {source}")]
    Conversion {
        addon_id: String,
        #[source]
        source: DomainError,
    },
}

impl CatalogError {
    /// ID of the addon whose conversion failed, if any.
    pub fn addon_id(&self) -> Option<&str> {
        match self {
            CatalogError::Retrieval(_) => None,
            CatalogError::Conversion { addon_id, .. } => Some(addon_id),
        }
    }
}
