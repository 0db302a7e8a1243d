//! Contracts of the services consumed by the presentation factories.
//!
//! Implementations live with the persistence and identity layers; this
//! crate only depends on the traits.

use crate::dto::{MemberGroupItemResponse, MemberItemResponse, PublicAccessEntrySlim};
use async_trait::async_trait;
use vellum_core::{
    EntityKey, EntitySlim, Interface, Member, MemberRole, NodeId, ObjectType, PublicAccessEntry,
    VellumResult,
};

/// Resolves tree entities across object types.
pub trait EntityService: Interface + Send + Sync {
    /// Resolves a node id to its key, or `None` if no such entity exists.
    fn get_key(&self, id: NodeId, object_type: ObjectType) -> Option<EntityKey>;

    /// Loads every entity of the given type whose id is in `ids`.
    ///
    /// Unknown ids are skipped; the result order is unspecified.
    fn get_all(&self, object_type: ObjectType, ids: &[NodeId]) -> Vec<EntitySlim>;
}

/// Member lookup.
pub trait MemberService: Interface + Send + Sync {
    /// Finds a member by login name.
    fn get_by_username(&self, username: &str) -> Option<Member>;
}

/// Access to the member roles known to the identity layer.
pub trait MemberRoleManager: Interface + Send + Sync {
    /// Returns every role.
    fn roles(&self) -> Vec<MemberRole>;
}

/// Maps member group entities to their item DTO.
pub trait MemberGroupMapper: Interface + Send + Sync {
    fn map(&self, entity: &EntitySlim) -> MemberGroupItemResponse;
}

/// Builds member item DTOs.
pub trait MemberPresentationFactory: Interface + Send + Sync {
    fn create_item_response(&self, member: &Member) -> MemberItemResponse;
}

/// Persistence of public access entries.
#[async_trait]
pub trait PublicAccessService: Interface + Send + Sync {
    /// Returns the entry protecting the content, which may be attached to
    /// the content itself or to one of its ancestors.
    async fn get_entry_for_content(&self, content_key: EntityKey) -> VellumResult<PublicAccessEntry>;

    /// Creates the entry for `entry.content_id`.
    async fn create(&self, entry: PublicAccessEntrySlim) -> VellumResult<PublicAccessEntry>;

    /// Replaces the entry for `entry.content_id`.
    async fn update(&self, entry: PublicAccessEntrySlim) -> VellumResult<PublicAccessEntry>;

    /// Removes the entry attached to the content.
    async fn delete(&self, content_key: EntityKey) -> VellumResult<()>;
}
