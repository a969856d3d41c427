//! Membership request DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /role-memberships`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRoleMembershipRequest {
    /// Role to grant.
    pub role_id: i64,
    /// User receiving the role.
    pub user_id: i64,
}

/// Body of `POST /workspace-memberships`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateWorkspaceMembershipRequest {
    /// Workspace to join.
    pub workspace_id: i64,
    /// User joining the workspace.
    pub user_id: i64,
}
