//! Lightweight entity projection.

use super::super::value_objects::ObjectType;
use crate::{EntityKey, NodeId};
use serde::{Deserialize, Serialize};

/// Minimal projection of any tree entity, as returned by batch lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySlim {
    pub id: NodeId,
    pub key: EntityKey,
    pub name: Option<String>,
    pub object_type: ObjectType,
}
