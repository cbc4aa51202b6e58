use crate::relay::{InboundRequest, Relay, RelayResponse};
use axum::{
    body::{self, Bytes},
    extract::{Request, State},
    http::Method,
};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
    pub max_body_bytes: usize,
}

pub async fn relay(State(state): State<AppState>, request: Request) -> RelayResponse {
    let request_id = Uuid::new_v4();
    let (parts, request_body) = request.into_parts();
    let method = parts.method;
    let span = info_span!("relay", %request_id, %method);

    async move {
        // Only POST bodies are read; everything else is refused by the relay.
        let body = if method == Method::POST {
            match body::to_bytes(request_body, state.max_body_bytes).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    error!("Failed to read request body: {}", e);
                    return RelayResponse::internal_error(format!(
                        "Failed to read request body: {}",
                        e
                    ));
                }
            }
        } else {
            Bytes::new()
        };

        info!("Received relay request ({} bytes)", body.len());

        let response = state.relay.handle(InboundRequest { method, body }).await;

        info!("Responding with {}", response.status);
        response
    }
    .instrument(span)
    .await
}
