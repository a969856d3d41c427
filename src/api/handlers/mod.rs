//! REST endpoint handlers organized by resource.
//!
//! Every CRUD resource here is a deliberate stub: the routes exist so
//! the frontend contract is pinned down, but each answers
//! `501 { "error": "Not implemented" }` until a backing service lands.

pub mod role_memberships;
pub mod roles;
pub mod system;
pub mod users;
pub mod workspace_memberships;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(users::routes())
        .merge(roles::routes())
        .merge(role_memberships::routes())
        .merge(workspace_memberships::routes())
}
