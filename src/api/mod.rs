pub mod health;
pub mod sign;

pub use health::{handle_health, HealthResponse, __path_handle_health};
pub use sign::{handle_sign, SignRequest, __path_handle_sign};

use axum::{extract::State, http::StatusCode};

use crate::error::ApiError;
use crate::server::AppState;

/// CORS preflight. Empty 204; the shared header layers carry the actual
/// CORS response headers.
pub async fn handle_preflight(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.configured()?;
    Ok(StatusCode::NO_CONTENT)
}

/// Any method other than GET/POST/OPTIONS on the signing endpoint.
/// Misconfiguration still wins over the method check.
pub async fn handle_method_not_allowed(State(state): State<AppState>) -> ApiError {
    match state.configured() {
        Ok(_) => ApiError::MethodNotAllowed,
        Err(e) => e,
    }
}

/// Fallback for paths outside the signing endpoint.
pub async fn handle_not_found() -> ApiError {
    ApiError::NotFound
}
