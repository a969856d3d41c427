//! User request DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /users`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Login email address.
    pub email: String,
    /// Display name shown on schedules.
    pub display_name: String,
}

/// Body of `PATCH /users/{id}`. All fields optional.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// New login email address.
    #[serde(default)]
    pub email: Option<String>,
    /// New display name.
    #[serde(default)]
    pub display_name: Option<String>,
}
