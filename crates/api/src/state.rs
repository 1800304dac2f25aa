use helm_broker_application::use_cases::GetCatalogUseCase;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct AppState {
    pub get_catalog: Arc<GetCatalogUseCase>,
    /// Cancelled on server shutdown; each request runs under a child token.
    pub shutdown: CancellationToken,
}
