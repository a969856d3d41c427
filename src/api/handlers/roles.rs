//! Role CRUD handlers — placeholder contract, all `501`.

use axum::extract::Path;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreateRoleRequest, UpdateRoleRequest};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /roles` — List roles.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`].
#[utoipa::path(
    get,
    path = "/api/v1/roles",
    tag = "Roles",
    summary = "List roles",
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn list_roles() -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// `POST /roles` — Create a role.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`].
#[utoipa::path(
    post,
    path = "/api/v1/roles",
    tag = "Roles",
    summary = "Create a role",
    request_body = CreateRoleRequest,
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn create_role(
    Json(_req): Json<CreateRoleRequest>,
) -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// `GET /roles/{id}` — Get a role.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`].
#[utoipa::path(
    get,
    path = "/api/v1/roles/{id}",
    tag = "Roles",
    summary = "Get a role",
    params(("id" = i64, Path, description = "Role ID")),
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn get_role(Path(_id): Path<i64>) -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// `PATCH /roles/{id}` — Update a role.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`].
#[utoipa::path(
    patch,
    path = "/api/v1/roles/{id}",
    tag = "Roles",
    summary = "Update a role",
    params(("id" = i64, Path, description = "Role ID")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn update_role(
    Path(_id): Path<i64>,
    Json(_req): Json<UpdateRoleRequest>,
) -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// `DELETE /roles/{id}` — Delete a role.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`].
#[utoipa::path(
    delete,
    path = "/api/v1/roles/{id}",
    tag = "Roles",
    summary = "Delete a role",
    params(("id" = i64, Path, description = "Role ID")),
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn delete_role(Path(_id): Path<i64>) -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// Role routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/roles", get(list_roles).post(create_role))
        .route(
            "/roles/{id}",
            get(get_role).patch(update_role).delete(delete_role),
        )
}
