use helm_broker_application::ports::AddonStorage;
use helm_broker_application::services::AddonToServiceConverter;
use helm_broker_application::use_cases::GetCatalogUseCase;
use helm_broker_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub get_catalog: Arc<GetCatalogUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, storage: Arc<dyn AddonStorage>) -> Self {
        Self {
            get_catalog: Arc::new(GetCatalogUseCase::with_scope(
                storage,
                Arc::new(AddonToServiceConverter::new()),
                config.catalog.scope(),
            )),
        }
    }
}
