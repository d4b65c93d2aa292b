use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::{self, AppState};
use crate::config::{ItinerAiConfig, ServerConfig};
use crate::generation::GeminiClient;
use crate::planner::TripPlanner;

/// Build the application router with its middleware stack
pub fn app(state: AppState, server: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new().nest("/api", api::router(state)).layer(
        // body limit outermost: its response body has no Default for the layers below
        ServiceBuilder::new()
            .layer(RequestBodyLimitLayer::new(server.body_limit_bytes))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(TimeoutLayer::new(Duration::from_secs(
                server.request_timeout_seconds.into(),
            ))),
    )
}

/// Handler state from configuration; planning is disabled without an API key
pub fn state_from_config(config: &ItinerAiConfig) -> AppState {
    let planner = match GeminiClient::new(config.gemini.clone()) {
        Ok(client) => Some(TripPlanner::new(Arc::new(client))),
        Err(e) => {
            warn!("Trip planning disabled: {}", e);
            None
        }
    };
    AppState { planner }
}

pub async fn run(config: &ItinerAiConfig) -> Result<()> {
    let app = app(state_from_config(config), &config.server);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Web server running at http://{}", addr);
    axum::serve(listener, app)
        .await
        .context("Web server terminated")?;
    Ok(())
}
