//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::UrlSigner;

/// Configuration-dependent pieces of the application, present only when the
/// environment supplied a complete credential set.
pub struct Configured {
    pub config: AppConfig,
    pub signer: UrlSigner,
}

/// Application state shared across all handlers.
///
/// A misconfigured process still builds a state and serves requests; every
/// handler then answers with the misconfiguration error, matching how the
/// original deployment behaved.
#[derive(Clone)]
pub struct AppState {
    configured: Option<Arc<Configured>>,
}

impl AppState {
    pub fn new(config: Option<AppConfig>) -> Self {
        let configured = config.map(|config| {
            let signer = UrlSigner::new(&config);
            Arc::new(Configured { config, signer })
        });
        Self { configured }
    }

    /// State from the process environment.
    pub fn from_env() -> Self {
        Self::new(AppConfig::from_env())
    }

    /// Config and signer, or the 500 error every branch must return when
    /// the process is misconfigured.
    pub fn configured(&self) -> Result<&Configured, ApiError> {
        self.configured.as_deref().ok_or(ApiError::Misconfigured)
    }

    pub fn is_configured(&self) -> bool {
        self.configured.is_some()
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests. Every
/// response, on every branch, carries the same fixed CORS header set so the
/// player page can call the endpoint cross-origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(api::handle_health)
                .post(api::handle_sign)
                .options(api::handle_preflight)
                .fallback(api::handle_method_not_allowed),
        )
        .fallback(api::handle_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            // In production, replace "*" with the player page's origin(s)
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type, Authorization"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static("86400"),
        ))
}
