//! Role request DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /roles`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRoleRequest {
    /// Workspace the role belongs to.
    pub workspace_id: i64,
    /// Role name (e.g. `"manager"`).
    pub name: String,
}

/// Body of `PATCH /roles/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRoleRequest {
    /// New role name.
    #[serde(default)]
    pub name: Option<String>,
}
