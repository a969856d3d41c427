//! rota-gateway server entry point.
//!
//! Starts the Axum HTTP server with REST and SSE endpoints.

use std::time::Duration;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use rota_gateway::api;
use rota_gateway::app_state::AppState;
use rota_gateway::config::GatewayConfig;
use rota_gateway::domain::EventBus;
use rota_gateway::stream::handler::stream_handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting rota-gateway");

    // Build application state
    let event_bus = EventBus::new(config.event_bus_capacity);
    let app_state = AppState {
        event_bus,
        sse_keep_alive: Duration::from_secs(config.sse_keep_alive_secs),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/events/stream", get(stream_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
