use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use helm_broker_domain::{CatalogError, DomainError};
use serde_json::json;

pub struct ApiError(pub CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CatalogError::Retrieval(DomainError::Cancelled) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "description": self.0.to_string() }))).into_response()
    }
}
