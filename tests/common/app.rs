//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Method, Request},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use signed_spaces::models::AppConfig;
use signed_spaces::server::{build_router, AppState};

/// Fixed test credentials; never valid against a real bucket.
pub fn test_config() -> AppConfig {
    AppConfig::new("700days", "ams3", "DO00EXAMPLEKEY", "testsecret")
}

/// Test application wrapping the production router.
pub struct TestApp {
    router: axum::Router,
}

impl TestApp {
    /// App with a complete configuration.
    pub fn new() -> Self {
        Self::with_config(Some(test_config()))
    }

    /// App simulating a process started without credentials.
    pub fn misconfigured() -> Self {
        Self::with_config(None)
    }

    pub fn with_config(config: Option<AppConfig>) -> Self {
        Self {
            router: build_router(AppState::new(config)),
        }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make an OPTIONS request (CORS preflight)
    pub async fn options(&self, path: &str) -> TestResponse {
        self.request(
            Request::builder()
                .method(Method::OPTIONS)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a request with an arbitrary method and empty body
    pub async fn request_method(&self, method: Method, path: &str) -> TestResponse {
        self.request(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        self.request(
            Request::post(path)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with no body at all
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        self.request(Request::post(path).body(Body::empty()).unwrap())
            .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: axum::http::StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
