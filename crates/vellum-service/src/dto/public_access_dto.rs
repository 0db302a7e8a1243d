//! Public access DTOs.

use super::{MemberGroupItemResponse, MemberItemResponse, ReferenceById};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Public access settings of a document, as shown to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicAccessResponse {
    /// Document shown to visitors who are not logged in.
    pub login_document: ReferenceById,
    /// Document shown to logged-in visitors without access.
    pub error_document: ReferenceById,
    /// Members granted access individually.
    pub members: Vec<MemberItemResponse>,
    /// Member groups granted access.
    pub groups: Vec<MemberGroupItemResponse>,
    /// True when the protection is inherited from an ancestor document.
    pub is_protected_by_ancestor: bool,
}

/// Request to create or replace the public access settings of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicAccessRequest {
    pub login_document: ReferenceById,
    pub error_document: ReferenceById,
    #[serde(default)]
    pub member_user_names: Vec<String>,
    #[serde(default)]
    pub member_group_names: Vec<String>,
}

/// Flattened public access settings handed to the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAccessEntrySlim {
    pub content_id: Uuid,
    pub member_user_names: Vec<String>,
    pub member_group_names: Vec<String>,
    pub error_page_id: Uuid,
    pub login_page_id: Uuid,
}
