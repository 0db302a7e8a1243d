//! Member and member group item DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Reference to another resource by its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReferenceById {
    pub id: Uuid,
}

impl ReferenceById {
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self { id }
    }
}

impl From<Uuid> for ReferenceById {
    fn from(id: Uuid) -> Self {
        Self { id }
    }
}

/// Member summary returned in item listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberItemResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub member_type: ReferenceById,
}

/// Member group summary returned in item listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemberGroupItemResponse {
    pub id: Uuid,
    pub name: String,
}
