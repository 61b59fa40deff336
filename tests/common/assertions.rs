//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert an error response: status code plus the exact error message
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    assert_status(response, status);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["error"].as_str(),
        Some(message),
        "Unexpected error body: {}",
        response.text()
    );
}

/// Assert the fixed CORS header set every branch must carry
pub fn assert_cors_headers(response: &TestResponse) {
    let header = |name: &str| {
        response
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_else(|| panic!("Missing header {name}"))
            .to_string()
    };

    assert_eq!(header("access-control-allow-origin"), "*");
    assert_eq!(header("access-control-allow-methods"), "GET, POST, OPTIONS");
    assert_eq!(
        header("access-control-allow-headers"),
        "Content-Type, Authorization"
    );
    assert_eq!(header("access-control-max-age"), "86400");
}

/// Assert the response carries a JSON content type
pub fn assert_json_content_type(response: &TestResponse) {
    let content_type = response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "Expected application/json, got {content_type:?}"
    );
}
