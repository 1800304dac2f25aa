use helm_broker_domain::config::CatalogConfig;
use helm_broker_infrastructure::storage::{AddonIndex, InMemoryAddonStorage};
use tracing::{error, info, warn};

pub fn init_storage(cfg: &CatalogConfig) -> anyhow::Result<InMemoryAddonStorage> {
    let Some(path) = cfg.addons_file.as_deref() else {
        warn!("No addons file configured, serving an empty catalog");
        return Ok(InMemoryAddonStorage::new());
    };

    info!(addons_file = %path, "Loading addon index");

    let storage = AddonIndex::from_file(path)
        .and_then(AddonIndex::into_storage)
        .map_err(|e| {
            error!(addons_file = %path, error = %e, "Failed to load addon index");
            anyhow::anyhow!(e)
        })?;

    Ok(storage)
}
