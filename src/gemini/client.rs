use crate::{Error, Result, config::ApiKey};
use async_trait::async_trait;
use axum::{body::Bytes, http::StatusCode};
use reqwest::{Client, Url, header::CONTENT_TYPE};
use tracing::debug;

/// Raw answer from the upstream API, before any interpretation.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Upstream: Send + Sync {
    /// POST a JSON body and return whatever status and body come back.
    /// Only transport failures are errors here.
    async fn post_json(&self, url: Url, body: Vec<u8>) -> Result<UpstreamReply>;
}

pub struct HttpUpstream {
    client: Client,
}

impl HttpUpstream {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn post_json(&self, url: Url, body: Vec<u8>) -> Result<UpstreamReply> {
        // The query string holds the key, so only origin and path are logged.
        debug!(
            "Posting {} bytes to {}{}",
            body.len(),
            url.origin().ascii_serialization(),
            url.path()
        );

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        debug!("Upstream answered {} with {} bytes", status, body.len());

        Ok(UpstreamReply { status, body })
    }
}

/// `{base_url}/{model}:generateContent?key={api_key}`
pub fn endpoint(base_url: &str, model: &str, api_key: &ApiKey) -> Result<Url> {
    let base = base_url.trim_end_matches('/');
    Url::parse_with_params(
        &format!("{base}/{model}:generateContent"),
        &[("key", api_key.expose())],
    )
    .map_err(|e| Error::config(format!("Invalid Gemini base URL '{}': {}", base_url, e)))
}
