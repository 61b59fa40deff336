use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::server::AppState;
use crate::services::key_validator::validate_key;
use crate::services::url_signer::SignedUrl;

/// Request body for presigning a download URL
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SignRequest {
    /// Object key to sign, must live under the signable prefix
    pub key: Option<String>,

    /// Requested lifetime in seconds; clamped server-side
    #[serde(rename = "ttlSec")]
    pub ttl_sec: Option<i64>,
}

/// Issue a presigned download URL
///
/// Validates the requested key against the signable prefix, then returns a
/// time-limited GET URL for it. The TTL is clamped, not rejected.
#[utoipa::path(
    post,
    path = "/",
    request_body = SignRequest,
    responses(
        (status = 200, description = "Presigned URL issued", body = SignedUrl),
        (status = 400, description = "Missing or unacceptable key"),
        (status = 500, description = "Server misconfiguration"),
    ),
    tag = "Signing"
)]
pub async fn handle_sign(
    State(state): State<AppState>,
    body: Option<Json<SignRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let configured = state.configured()?;

    let request = body.map(|Json(r)| r).unwrap_or_default();
    let raw_key = request.key.as_deref().ok_or(ApiError::MissingKey)?;
    let clean_key = validate_key(raw_key)?;

    let signed = configured
        .signer
        .presign_get(&clean_key, request.ttl_sec, Utc::now());

    tracing::info!(
        key = %signed.key,
        expires_in = signed.expires_in,
        "Issued presigned URL"
    );

    Ok(Json(signed))
}
