use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::server::AppState;

/// Masked health/status payload
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always true when the service can answer at all
    pub alive: bool,
    /// Bucket the service signs for
    pub bucket: String,
    /// Region the bucket lives in
    pub region: String,
    /// Last 4 characters of the access key; the full key is never echoed
    #[serde(rename = "accessKeySuffix")]
    pub access_key_suffix: String,
}

/// Health check
///
/// Reports the configured bucket and region with a masked credential hint.
/// The secret key never appears here in any form.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is alive and configured", body = HealthResponse),
        (status = 500, description = "Server misconfiguration"),
    ),
    tag = "Health"
)]
pub async fn handle_health(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let configured = state.configured()?;

    Ok(Json(HealthResponse {
        alive: true,
        bucket: configured.config.bucket.clone(),
        region: configured.config.region.clone(),
        access_key_suffix: configured.config.access_key_suffix(),
    }))
}
