//! Common test utilities for integration tests
//!
//! The API is stateless, so every test gets its own router over an
//! in-memory configuration.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use macro_tracker_backend::{
    config::{AppConfig, CalculationConfig, ServerConfig},
    routes,
    state::AppState,
};
use serde_json::Value;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a test application with permissive profile handling
    pub fn new() -> Self {
        Self::with_config(test_config(false))
    }

    /// Create a test application that rejects degenerate profiles
    pub fn strict() -> Self {
        Self::with_config(test_config(true))
    }

    fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config);
        Self {
            app: routes::create_router(state),
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await.map_body()
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &Value) -> (StatusCode, String) {
        self.post_raw(path, body).await.map_body()
    }

    /// Make a POST request and keep the response headers
    pub async fn post_raw(&self, path: &str, body: &Value) -> RawResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request and parse the JSON response
    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let (status, body) = self.post(path, body).await;
        let json = serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("invalid JSON from {}: {} ({})", path, e, body));
        (status, json)
    }

    async fn send(&self, request: Request<Body>) -> RawResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        RawResponse {
            status,
            headers,
            body: String::from_utf8(body.to_vec()).unwrap(),
        }
    }
}

/// Response with headers, for download endpoints
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: String,
}

impl RawResponse {
    fn map_body(self) -> (StatusCode, String) {
        (self.status, self.body)
    }

    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

fn test_config(strict: bool) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 5,
        },
        calculations: CalculationConfig {
            strict_profile_validation: strict,
        },
    }
}

/// Reference male profile: 70 kg, 175 cm, 25 y, moderate, maintain
pub fn male_profile() -> Value {
    serde_json::json!({
        "weight_kg": 70.0,
        "height_cm": 175.0,
        "age_years": 25,
        "sex": "male",
        "activity_level": "moderate",
        "goal": "maintain",
        "neck_cm": 38.0,
        "waist_cm": 85.0
    })
}

/// Reference female profile: 60 kg, 165 cm, 30 y, light, lose
pub fn female_profile() -> Value {
    serde_json::json!({
        "weight_kg": 60.0,
        "height_cm": 165.0,
        "age_years": 30,
        "sex": "female",
        "activity_level": "light",
        "goal": "lose",
        "neck_cm": 32.0,
        "waist_cm": 70.0,
        "hip_cm": 95.0
    })
}
