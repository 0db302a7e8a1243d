//! Member and member role entities.

use crate::{EntityKey, NodeId};
use serde::{Deserialize, Serialize};

/// A front-end member account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Node id of the member.
    pub id: NodeId,
    /// Stable key of the member.
    pub key: EntityKey,
    /// Unique login name.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Key of the member type the member is based on.
    pub member_type_key: EntityKey,
}

/// A member role as exposed by the identity layer.
///
/// The identity layer stores the id as a string; for roles backed by a
/// member group it holds the group's integer node id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRole {
    pub id: String,
    pub name: Option<String>,
}

impl MemberRole {
    /// Creates a named role.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// Returns the member group node id, if the role id is numeric.
    #[must_use]
    pub fn group_id(&self) -> Option<NodeId> {
        self.id.trim().parse::<i32>().ok().map(NodeId)
    }
}
