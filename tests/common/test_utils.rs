#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, Response},
};
use gemini_relay::{
    config::{ApiKey, GeminiConfig, ServerConfig},
    gemini::HttpUpstream,
    relay::Relay,
    server,
};
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEXT_PATH: &str = "/models/gemini-2.5-flash-preview-05-20:generateContent";
pub const SPEECH_PATH: &str = "/models/gemini-2.5-flash-preview-tts:generateContent";

/// Gemini settings pointing at a mock upstream
pub fn gemini_config(upstream_uri: &str) -> GeminiConfig {
    GeminiConfig {
        base_url: format!("{upstream_uri}/models"),
        ..GeminiConfig::default()
    }
}

pub fn create_relay(upstream_uri: &str, api_key: Option<&str>) -> Relay {
    Relay::new(
        Arc::new(HttpUpstream::new()),
        gemini_config(upstream_uri),
        api_key.map(ApiKey::new),
    )
}

/// Router wired exactly as `server::run` wires it, minus the listener
pub fn create_test_app(upstream_uri: &str, api_key: Option<&str>) -> Router {
    create_test_app_with(upstream_uri, api_key, &ServerConfig::default())
}

pub fn create_test_app_with(
    upstream_uri: &str,
    api_key: Option<&str>,
    server_config: &ServerConfig,
) -> Router {
    let relay = create_relay(upstream_uri, api_key);
    server::router(Arc::new(relay), server_config).unwrap()
}

pub fn request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn post_json(body: &str) -> Request<Body> {
    request("POST", "/", body.to_string())
}

pub async fn body_bytes(response: Response<Body>) -> Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await.to_vec()).unwrap()
}
