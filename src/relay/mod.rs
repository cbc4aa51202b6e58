//! The relay: shapes a Gemini request from the inbound prompt, attaches the
//! server-held API key and hands the upstream answer back to the caller.

mod types;

pub use types::*;

use crate::{
    Error, Result,
    config::{ApiKey, GeminiConfig},
    gemini::{self, GeminiPayload, Upstream},
};
use axum::{
    body::Bytes,
    http::{Method, StatusCode},
};
use serde::de::IgnoredAny;
use std::sync::Arc;
use tracing::{debug, error, info};

pub const UPSTREAM_ERROR_PREFIX: &str = "Error communicating with the Gemini API: ";

pub struct Relay {
    upstream: Arc<dyn Upstream>,
    settings: GeminiConfig,
    api_key: Option<ApiKey>,
}

impl Relay {
    pub fn new(
        upstream: Arc<dyn Upstream>,
        settings: GeminiConfig,
        api_key: Option<ApiKey>,
    ) -> Self {
        if api_key.is_none() {
            error!(
                "Gemini API key is not configured (set {}); every request will fail",
                settings.api_key_env
            );
        }
        Self {
            upstream,
            settings,
            api_key,
        }
    }

    pub async fn handle(&self, request: InboundRequest) -> RelayResponse {
        if request.method != Method::POST {
            debug!("Rejecting {} request", request.method);
            return RelayResponse::method_not_allowed();
        }

        match self.forward(&request.body).await {
            Ok(body) => RelayResponse::json(StatusCode::OK, body),
            Err(Error::Upstream { status, body }) => {
                error!("Gemini API returned {}: {}", status, body);
                RelayResponse::text(status, format!("{UPSTREAM_ERROR_PREFIX}{body}"))
            }
            Err(e) => {
                error!("Relay request failed: {}", e);
                RelayResponse::internal_error(e.to_string())
            }
        }
    }

    /// Select the model and payload for a parsed request.
    pub fn payload_for(&self, request: &PromptRequest) -> (&str, GeminiPayload) {
        match request.kind() {
            RequestKind::Speech => {
                let model = self.settings.speech_model.as_str();
                let payload = GeminiPayload::speech(
                    &request.prompt,
                    &self.settings.speech_prefix,
                    &self.settings.voice_name,
                    model,
                );
                (model, payload)
            }
            RequestKind::Text => (
                self.settings.text_model.as_str(),
                GeminiPayload::text(&request.prompt),
            ),
        }
    }

    async fn forward(&self, body: &[u8]) -> Result<Bytes> {
        let request: PromptRequest = serde_json::from_slice(body)?;

        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| Error::config("Gemini API key is not configured on the server"))?;

        let (model, payload) = self.payload_for(&request);
        info!(kind = ?request.kind(), model, "Forwarding prompt to Gemini");

        let url = gemini::endpoint(&self.settings.base_url, model, api_key)?;
        let reply = self
            .upstream
            .post_json(url, serde_json::to_vec(&payload)?)
            .await?;

        if !reply.status.is_success() {
            let text = String::from_utf8_lossy(&reply.body).into_owned();
            return Err(Error::upstream(reply.status, text));
        }

        // Validate only; the caller gets the upstream bytes untouched.
        serde_json::from_slice::<IgnoredAny>(&reply.body)?;
        Ok(reply.body)
    }
}
