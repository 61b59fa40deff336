use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::key_validator::KeyError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Missing 'key'")]
    MissingKey,

    #[error("Invalid key prefix")]
    InvalidPrefix,

    #[error("Invalid key")]
    PathTraversal,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Not found")]
    NotFound,

    #[error("Server misconfiguration")]
    Misconfigured,
}

impl From<KeyError> for ApiError {
    fn from(e: KeyError) -> Self {
        match e {
            KeyError::MissingKey => ApiError::MissingKey,
            KeyError::InvalidPrefix => ApiError::InvalidPrefix,
            KeyError::PathTraversal => ApiError::PathTraversal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingKey | ApiError::InvalidPrefix | ApiError::PathTraversal => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Misconfigured => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // No internal detail crosses this boundary; the message strings are
        // part of the wire contract.
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_match_wire_contract() {
        assert_eq!(ApiError::MissingKey.to_string(), "Missing 'key'");
        assert_eq!(ApiError::InvalidPrefix.to_string(), "Invalid key prefix");
        assert_eq!(ApiError::PathTraversal.to_string(), "Invalid key");
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Method Not Allowed");
        assert_eq!(
            ApiError::Misconfigured.to_string(),
            "Server misconfiguration"
        );
    }

    #[test]
    fn test_key_error_conversion() {
        assert_eq!(ApiError::from(KeyError::MissingKey), ApiError::MissingKey);
        assert_eq!(
            ApiError::from(KeyError::InvalidPrefix),
            ApiError::InvalidPrefix
        );
        assert_eq!(
            ApiError::from(KeyError::PathTraversal),
            ApiError::PathTraversal
        );
    }

    #[test]
    fn test_into_response_status_codes() {
        let response = ApiError::MissingKey.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::InvalidPrefix.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::PathTraversal.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Misconfigured.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
