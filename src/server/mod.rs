pub mod handlers;

use crate::{
    Error, Result,
    config::{Config, ServerConfig},
    gemini::HttpUpstream,
    relay::Relay,
};
use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::any,
};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub fn router(relay: Arc<Relay>, config: &ServerConfig) -> Result<Router> {
    if !config.path.starts_with('/') {
        return Err(Error::config(format!(
            "server.path must start with '/', got '{}'",
            config.path
        )));
    }

    let app_state = handlers::AppState {
        relay,
        max_body_bytes: config.max_body_bytes,
    };

    // Method filtering is the relay's job, so the route takes every method.
    let mut app = Router::new()
        .route(&config.path, any(handlers::relay))
        .with_state(app_state);

    if let Some(cors) = cors_layer(&config.allowed_origins)? {
        app = app.layer(cors);
    }

    Ok(app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http())))
}

fn cors_layer(allowed_origins: &[String]) -> Result<Option<CorsLayer>> {
    if allowed_origins.is_empty() {
        return Ok(None);
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| Error::config(format!("Invalid CORS origin '{}': {}", origin, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::POST])
            .allow_headers([CONTENT_TYPE]),
    ))
}

pub async fn run(config: Config) -> Result<()> {
    let api_key = config.gemini.resolve_api_key();
    let relay = Relay::new(Arc::new(HttpUpstream::new()), config.gemini.clone(), api_key);

    let app = router(Arc::new(relay), &config.server)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting relay on {}{}", addr, config.server.path);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
