//! In-memory content catalog.
//!
//! Backs every collaborator the public access endpoints need when the
//! server runs standalone. Each component wraps the same shared
//! [`Catalog`], handed in through its shaku parameters.

use async_trait::async_trait;
use parking_lot::RwLock;
use shaku::Component;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;
use vellum_core::{
    EntityKey, EntitySlim, Member, MemberRole, NodeId, ObjectType, PublicAccessEntry,
    PublicAccessOperationStatus, PublicAccessRule, VellumResult,
};
use vellum_service::{
    EntityService, MemberRoleManager, MemberService, PublicAccessEntrySlim, PublicAccessService,
};

#[derive(Debug, Clone, Copy)]
struct DocumentNode {
    key: EntityKey,
    parent: Option<NodeId>,
}

/// Documents, members, member groups and public access entries.
#[derive(Debug, Default)]
pub struct Catalog {
    documents: RwLock<HashMap<NodeId, DocumentNode>>,
    members: RwLock<Vec<Member>>,
    groups: RwLock<Vec<EntitySlim>>,
    roles: RwLock<Vec<MemberRole>>,
    entries: RwLock<HashMap<NodeId, PublicAccessEntry>>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document below `parent`, or at the root.
    pub fn add_document(&self, id: NodeId, key: EntityKey, parent: Option<NodeId>) {
        self.documents.write().insert(id, DocumentNode { key, parent });
    }

    pub fn add_member(&self, member: Member) {
        self.members.write().push(member);
    }

    /// Adds a member group together with the role that names it.
    pub fn add_member_group(&self, id: NodeId, key: EntityKey, name: &str) {
        self.groups.write().push(EntitySlim {
            id,
            key,
            name: Some(name.to_string()),
            object_type: ObjectType::MemberGroup,
        });
        self.roles.write().push(MemberRole::new(id.to_string(), name));
    }

    fn document_id(&self, key: EntityKey) -> Option<NodeId> {
        self.documents
            .read()
            .iter()
            .find(|(_, node)| node.key == key)
            .map(|(id, _)| *id)
    }

    /// First entry found walking from the document up to the root.
    fn entry_for(&self, id: NodeId) -> Option<PublicAccessEntry> {
        let documents = self.documents.read();
        let entries = self.entries.read();

        let mut current = Some(id);
        // Bounded by the tree size so a malformed parent chain cannot loop.
        for _ in 0..=documents.len() {
            let node = current?;
            if let Some(entry) = entries.get(&node) {
                return Some(entry.clone());
            }
            current = documents.get(&node).and_then(|document| document.parent);
        }
        None
    }

    fn resolve_nodes(&self, slim: &PublicAccessEntrySlim) -> VellumResult<(NodeId, NodeId, NodeId)> {
        let content = self
            .document_id(EntityKey::from_uuid(slim.content_id))
            .ok_or(PublicAccessOperationStatus::ContentNotFound)?;
        let login = self
            .document_id(EntityKey::from_uuid(slim.login_page_id))
            .ok_or(PublicAccessOperationStatus::LoginNodeNotFound)?;
        let error = self
            .document_id(EntityKey::from_uuid(slim.error_page_id))
            .ok_or(PublicAccessOperationStatus::ErrorNodeNotFound)?;
        Ok((content, login, error))
    }
}

fn rules_from(slim: &PublicAccessEntrySlim) -> Vec<PublicAccessRule> {
    slim.member_user_names
        .iter()
        .map(|name| PublicAccessRule::member_username(name.as_str()))
        .chain(
            slim.member_group_names
                .iter()
                .map(|name| PublicAccessRule::member_role(name.as_str())),
        )
        .collect()
}

/// Entity lookups over the catalog.
#[derive(Component)]
#[shaku(interface = EntityService)]
pub struct InMemoryEntityService {
    pub(crate) catalog: Arc<Catalog>,
}

impl EntityService for InMemoryEntityService {
    fn get_key(&self, id: NodeId, object_type: ObjectType) -> Option<EntityKey> {
        match object_type {
            ObjectType::Document => self.catalog.documents.read().get(&id).map(|node| node.key),
            ObjectType::Member => self
                .catalog
                .members
                .read()
                .iter()
                .find(|member| member.id == id)
                .map(|member| member.key),
            ObjectType::MemberGroup => self
                .catalog
                .groups
                .read()
                .iter()
                .find(|group| group.id == id)
                .map(|group| group.key),
        }
    }

    fn get_all(&self, object_type: ObjectType, ids: &[NodeId]) -> Vec<EntitySlim> {
        match object_type {
            ObjectType::Document => self
                .catalog
                .documents
                .read()
                .iter()
                .filter(|(id, _)| ids.contains(id))
                .map(|(id, node)| EntitySlim {
                    id: *id,
                    key: node.key,
                    name: None,
                    object_type,
                })
                .collect(),
            ObjectType::Member => self
                .catalog
                .members
                .read()
                .iter()
                .filter(|member| ids.contains(&member.id))
                .map(|member| EntitySlim {
                    id: member.id,
                    key: member.key,
                    name: Some(member.name.clone()),
                    object_type,
                })
                .collect(),
            ObjectType::MemberGroup => self
                .catalog
                .groups
                .read()
                .iter()
                .filter(|group| ids.contains(&group.id))
                .cloned()
                .collect(),
        }
    }
}

#[derive(Component)]
#[shaku(interface = MemberService)]
pub struct InMemoryMemberService {
    pub(crate) catalog: Arc<Catalog>,
}

impl MemberService for InMemoryMemberService {
    fn get_by_username(&self, username: &str) -> Option<Member> {
        self.catalog
            .members
            .read()
            .iter()
            .find(|member| member.username == username)
            .cloned()
    }
}

#[derive(Component)]
#[shaku(interface = MemberRoleManager)]
pub struct InMemoryMemberRoleManager {
    pub(crate) catalog: Arc<Catalog>,
}

impl MemberRoleManager for InMemoryMemberRoleManager {
    fn roles(&self) -> Vec<MemberRole> {
        self.catalog.roles.read().clone()
    }
}

/// Public access entries keyed by the node they protect.
#[derive(Component)]
#[shaku(interface = PublicAccessService)]
pub struct InMemoryPublicAccessService {
    pub(crate) catalog: Arc<Catalog>,
}

#[async_trait]
impl PublicAccessService for InMemoryPublicAccessService {
    async fn get_entry_for_content(&self, content_key: EntityKey) -> VellumResult<PublicAccessEntry> {
        let content = self
            .catalog
            .document_id(content_key)
            .ok_or(PublicAccessOperationStatus::ContentNotFound)?;

        self.catalog
            .entry_for(content)
            .ok_or_else(|| PublicAccessOperationStatus::EntryNotFound.into())
    }

    async fn create(&self, entry: PublicAccessEntrySlim) -> VellumResult<PublicAccessEntry> {
        let (content, login, error) = self.catalog.resolve_nodes(&entry)?;
        let created = PublicAccessEntry::new(Uuid::new_v4(), content, login, error, rules_from(&entry));

        self.catalog.entries.write().insert(content, created.clone());
        info!(node_id = %content, entry = %created.key(), "Public access entry created");
        Ok(created)
    }

    async fn update(&self, entry: PublicAccessEntrySlim) -> VellumResult<PublicAccessEntry> {
        let (content, login, error) = self.catalog.resolve_nodes(&entry)?;

        let mut entries = self.catalog.entries.write();
        let existing = entries
            .get(&content)
            .ok_or(PublicAccessOperationStatus::EntryNotFound)?;
        let updated = PublicAccessEntry::new(existing.key(), content, login, error, rules_from(&entry));

        entries.insert(content, updated.clone());
        debug!(node_id = %content, "Public access entry replaced");
        Ok(updated)
    }

    async fn delete(&self, content_key: EntityKey) -> VellumResult<()> {
        let content = self
            .catalog
            .document_id(content_key)
            .ok_or(PublicAccessOperationStatus::ContentNotFound)?;

        if self.catalog.entries.write().remove(&content).is_none() {
            return Err(PublicAccessOperationStatus::EntryNotFound.into());
        }

        info!(node_id = %content, "Public access entry removed");
        Ok(())
    }
}
