//! Workspace membership handlers — placeholder contract, all `501`.

use axum::extract::Path;
use axum::routing::{delete, get};
use axum::{Json, Router};

use crate::api::dto::CreateWorkspaceMembershipRequest;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /workspace-memberships` — List workspace memberships.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`].
#[utoipa::path(
    get,
    path = "/api/v1/workspace-memberships",
    tag = "Memberships",
    summary = "List workspace memberships",
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn list_workspace_memberships() -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// `POST /workspace-memberships` — Add a user to a workspace.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`].
#[utoipa::path(
    post,
    path = "/api/v1/workspace-memberships",
    tag = "Memberships",
    summary = "Add a user to a workspace",
    request_body = CreateWorkspaceMembershipRequest,
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn create_workspace_membership(
    Json(_req): Json<CreateWorkspaceMembershipRequest>,
) -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// `DELETE /workspace-memberships/{id}` — Remove a user from a workspace.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`].
#[utoipa::path(
    delete,
    path = "/api/v1/workspace-memberships/{id}",
    tag = "Memberships",
    summary = "Remove a user from a workspace",
    params(("id" = i64, Path, description = "Membership ID")),
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn delete_workspace_membership(
    Path(_id): Path<i64>,
) -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// Workspace membership routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/workspace-memberships",
            get(list_workspace_memberships).post(create_workspace_membership),
        )
        .route(
            "/workspace-memberships/{id}",
            delete(delete_workspace_membership),
        )
}
