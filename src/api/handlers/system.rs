//! System endpoints: health check and the stream message-type catalog.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Metadata for one stream message type.
#[derive(Debug, Serialize, ToSchema)]
struct MessageTypeInfo {
    message_type: &'static str,
    description: &'static str,
    workspace_scoped: bool,
}

/// `GET /config/message-types` — List stream message types.
#[utoipa::path(
    get,
    path = "/config/message-types",
    tag = "System",
    summary = "List stream message types",
    description = "Returns metadata for every message type the event stream can emit.",
    responses(
        (status = 200, description = "Message type catalog", body = Vec<MessageTypeInfo>),
    )
)]
pub async fn message_types_handler() -> impl IntoResponse {
    let types = vec![
        MessageTypeInfo {
            message_type: "shift.created",
            description: "A new shift was added to a workspace schedule",
            workspace_scoped: true,
        },
        MessageTypeInfo {
            message_type: "shift.updated",
            description: "An existing shift changed (times or assignment)",
            workspace_scoped: true,
        },
        MessageTypeInfo {
            message_type: "shift.deleted",
            description: "A shift was removed from the schedule",
            workspace_scoped: true,
        },
        MessageTypeInfo {
            message_type: "membership.changed",
            description: "A user joined, left, or changed role in a workspace",
            workspace_scoped: true,
        },
        MessageTypeInfo {
            message_type: "workspace.updated",
            description: "Workspace metadata changed",
            workspace_scoped: true,
        },
    ];
    (StatusCode::OK, Json(types))
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/message-types", get(message_types_handler))
}
