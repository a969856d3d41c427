//! Role membership handlers — placeholder contract, all `501`.

use axum::extract::Path;
use axum::routing::{delete, get};
use axum::{Json, Router};

use crate::api::dto::CreateRoleMembershipRequest;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /role-memberships` — List role memberships.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`].
#[utoipa::path(
    get,
    path = "/api/v1/role-memberships",
    tag = "Memberships",
    summary = "List role memberships",
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn list_role_memberships() -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// `POST /role-memberships` — Grant a role to a user.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`].
#[utoipa::path(
    post,
    path = "/api/v1/role-memberships",
    tag = "Memberships",
    summary = "Grant a role to a user",
    request_body = CreateRoleMembershipRequest,
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn create_role_membership(
    Json(_req): Json<CreateRoleMembershipRequest>,
) -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// `DELETE /role-memberships/{id}` — Revoke a role membership.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`].
#[utoipa::path(
    delete,
    path = "/api/v1/role-memberships/{id}",
    tag = "Memberships",
    summary = "Revoke a role membership",
    params(("id" = i64, Path, description = "Membership ID")),
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn delete_role_membership(
    Path(_id): Path<i64>,
) -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// Role membership routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/role-memberships",
            get(list_role_memberships).post(create_role_membership),
        )
        .route("/role-memberships/{id}", delete(delete_role_membership))
}
