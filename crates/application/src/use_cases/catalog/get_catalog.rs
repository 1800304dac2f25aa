use helm_broker_domain::{AddonScope, CatalogError, CatalogResponse, DomainError, OsbContext};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

use crate::ports::{AddonConverter, AddonStorage};

pub struct GetCatalogUseCase {
    storage: Arc<dyn AddonStorage>,
    converter: Arc<dyn AddonConverter>,
    scope: AddonScope,
}

impl GetCatalogUseCase {
    pub fn new(storage: Arc<dyn AddonStorage>, converter: Arc<dyn AddonConverter>) -> Self {
        Self::with_scope(storage, converter, AddonScope::ClusterWide)
    }

    pub fn with_scope(
        storage: Arc<dyn AddonStorage>,
        converter: Arc<dyn AddonConverter>,
        scope: AddonScope,
    ) -> Self {
        Self {
            storage,
            converter,
            scope,
        }
    }

    pub fn scope(&self) -> &AddonScope {
        &self.scope
    }

    /// Builds the full catalog. Either every addon converts or the call fails.
    #[instrument(skip(self, cancel), fields(scope = %self.scope))]
    pub async fn execute(
        &self,
        cancel: &CancellationToken,
        osb_ctx: &OsbContext,
    ) -> Result<CatalogResponse, CatalogError> {
        if cancel.is_cancelled() {
            return Err(CatalogError::Retrieval(DomainError::Cancelled));
        }

        let addons = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(DomainError::Cancelled),
            found = self.storage.find_all(&self.scope) => found,
        }
        .map_err(|e| {
            error!(error = %e, "Failed to find addons");
            CatalogError::Retrieval(e)
        })?;

        debug!(count = addons.len(), "Addons retrieved");

        let mut services = Vec::with_capacity(addons.len());
        for addon in &addons {
            let service = self.converter.convert(addon).map_err(|e| {
                error!(addon_id = %addon.id, error = %e, "Failed to convert addon");
                CatalogError::Conversion {
                    addon_id: addon.id.clone(),
                    source: e,
                }
            })?;
            services.push(service);
        }

        info!(
            services = services.len(),
            originating_identity = %osb_ctx.originating_identity,
            api_version = %osb_ctx.api_version,
            "Catalog built"
        );

        Ok(CatalogResponse { services })
    }
}
