use axum::{extract::State, http::HeaderMap, response::Json};
use helm_broker_domain::{CatalogResponse, OsbContext};
use tracing::{debug, instrument};

use crate::{errors::ApiError, state::AppState};

pub const API_VERSION_HEADER: &str = "X-Broker-API-Version";
pub const ORIGINATING_IDENTITY_HEADER: &str = "X-Broker-API-Originating-Identity";

fn header_value(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn osb_context(headers: &HeaderMap) -> OsbContext {
    OsbContext::new(
        header_value(headers, ORIGINATING_IDENTITY_HEADER),
        header_value(headers, API_VERSION_HEADER),
    )
}

#[instrument(skip(state, headers), name = "api_get_catalog")]
pub async fn get_catalog(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CatalogResponse>, ApiError> {
    let osb_ctx = osb_context(&headers);
    let cancel = state.shutdown.child_token();

    let catalog = state.get_catalog.execute(&cancel, &osb_ctx).await?;

    debug!(services = catalog.services.len(), "Catalog served");
    Ok(Json(catalog))
}
