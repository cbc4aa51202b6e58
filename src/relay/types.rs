use axum::{
    body::{Body, Bytes},
    http::{Method, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// What the hosting layer hands to the relay: the method and the untouched body.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    pub body: Bytes,
}

/// Parsed inbound body.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Text,
    Speech,
}

impl PromptRequest {
    /// Only the exact string `"tts"` selects speech; anything else is text.
    pub fn kind(&self) -> RequestKind {
        match self.kind.as_deref() {
            Some("tts") => RequestKind::Speech,
            _ => RequestKind::Text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub content_type: Option<&'static str>,
    pub body: Bytes,
}

impl RelayResponse {
    pub fn json(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: Some("application/json"),
            body: body.into(),
        }
    }

    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("text/plain; charset=utf-8"),
            body: Bytes::from(body.into()),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::text(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        let body = ErrorResponse {
            error: message.into(),
        };
        // A struct with one String field always serializes.
        let bytes = serde_json::to_vec(&body).unwrap_or_else(|_| b"{}".to_vec());
        Self::json(StatusCode::INTERNAL_SERVER_ERROR, bytes)
    }

    #[cfg(test)]
    pub fn body_str(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap_or_default()
    }
}

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        let mut builder = Response::builder().status(self.status);
        if let Some(content_type) = self.content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        builder
            .body(Body::from(self.body))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
    }
}
