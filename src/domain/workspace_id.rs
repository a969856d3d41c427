//! Type-safe workspace identifier.
//!
//! [`WorkspaceId`] is a newtype wrapper around `i64` providing type
//! safety so that workspace identifiers cannot be confused with other
//! integer keys (shift IDs, user IDs).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a workspace (tenant/team scope).
///
/// Shifts and memberships are organized under a workspace, and SSE
/// subscriptions may be scoped to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(i64);

impl WorkspaceId {
    /// Creates a `WorkspaceId` from a raw integer key.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer key.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for WorkspaceId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<WorkspaceId> for i64 {
    fn from(id: WorkspaceId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_is_plain_integer() {
        let id = WorkspaceId::new(42);
        assert_eq!(format!("{id}"), "42");
    }

    #[test]
    fn serde_is_transparent() {
        let id = WorkspaceId::new(7);
        let json = serde_json::to_string(&id).unwrap_or_default();
        assert_eq!(json, "7");
        let back: Option<WorkspaceId> = serde_json::from_str(&json).ok();
        assert_eq!(back, Some(id));
    }

    #[test]
    fn hash_works_in_hashmap() {
        use std::collections::HashMap;
        let id = WorkspaceId::new(1);
        let mut map = HashMap::new();
        map.insert(id, "test");
        assert_eq!(map.get(&id), Some(&"test"));
    }
}
