//! User CRUD handlers — placeholder contract, all `501`.

use axum::extract::Path;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreateUserRequest, UpdateUserRequest};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /users` — List users.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`]; the user store is
/// an external collaborator.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    summary = "List users",
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn list_users() -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// `POST /users` — Create a user.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`].
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    summary = "Create a user",
    request_body = CreateUserRequest,
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn create_user(
    Json(_req): Json<CreateUserRequest>,
) -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// `GET /users/{id}` — Get a user.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`].
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    summary = "Get a user",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn get_user(Path(_id): Path<i64>) -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// `PATCH /users/{id}` — Update a user.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`].
#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    tag = "Users",
    summary = "Update a user",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn update_user(
    Path(_id): Path<i64>,
    Json(_req): Json<UpdateUserRequest>,
) -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// `DELETE /users/{id}` — Delete a user.
///
/// # Errors
///
/// Always returns [`GatewayError::NotImplemented`].
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    summary = "Delete a user",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn delete_user(Path(_id): Path<i64>) -> Result<Json<serde_json::Value>, GatewayError> {
    Err(GatewayError::NotImplemented)
}

/// User routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn every_user_route_answers_501() {
        let Err(err) = list_users().await else {
            panic!("expected stub to return an error");
        };
        assert_eq!(err.status_code(), StatusCode::NOT_IMPLEMENTED);

        let Err(err) = get_user(Path(1)).await else {
            panic!("expected stub to return an error");
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }
}
