//! In-memory collaborators for router tests.

use crate::state::AppState;
use async_trait::async_trait;
use shaku::Component;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use vellum_core::{
    EntityKey, EntitySlim, Member, MemberRole, NodeId, ObjectType, PublicAccessEntry,
    PublicAccessOperationStatus, PublicAccessRule, VellumResult,
};
use vellum_service::{
    DefaultMemberGroupMapper, DefaultMemberPresentationFactory, EntityService, MemberRoleManager,
    MemberService, PublicAccessEntrySlim, PublicAccessPresentationFactoryImpl,
    PublicAccessService,
};

pub const PROTECTED_NODE: i32 = 100;
pub const LOGIN_NODE: i32 = 200;
pub const ERROR_NODE: i32 = 300;

#[derive(Component, Default)]
#[shaku(interface = EntityService)]
pub struct FakeEntities {
    #[shaku(default)]
    documents: HashMap<NodeId, EntityKey>,
    #[shaku(default)]
    groups: Vec<EntitySlim>,
}

impl EntityService for FakeEntities {
    fn get_key(&self, id: NodeId, object_type: ObjectType) -> Option<EntityKey> {
        match object_type {
            ObjectType::Document => self.documents.get(&id).copied(),
            _ => None,
        }
    }

    fn get_all(&self, object_type: ObjectType, ids: &[NodeId]) -> Vec<EntitySlim> {
        self.groups
            .iter()
            .filter(|group| group.object_type == object_type && ids.contains(&group.id))
            .cloned()
            .collect()
    }
}

#[derive(Component, Default)]
#[shaku(interface = MemberService)]
pub struct FakeMembers {
    #[shaku(default)]
    members: Vec<Member>,
}

impl MemberService for FakeMembers {
    fn get_by_username(&self, username: &str) -> Option<Member> {
        self.members.iter().find(|m| m.username == username).cloned()
    }
}

#[derive(Component, Default)]
#[shaku(interface = MemberRoleManager)]
pub struct FakeRoles {
    #[shaku(default)]
    roles: Vec<MemberRole>,
}

impl MemberRoleManager for FakeRoles {
    fn roles(&self) -> Vec<MemberRole> {
        self.roles.clone()
    }
}

/// Stores entries by content key and records every slim it is handed.
#[derive(Component, Default)]
#[shaku(interface = PublicAccessService)]
pub struct FakePublicAccessService {
    #[shaku(default)]
    entries: Mutex<HashMap<EntityKey, PublicAccessEntry>>,
    #[shaku(default)]
    saved: Mutex<Vec<PublicAccessEntrySlim>>,
}

impl FakePublicAccessService {
    pub fn insert(&self, content: EntityKey, entry: PublicAccessEntry) {
        self.entries.lock().unwrap().insert(content, entry);
    }

    pub fn saved(&self) -> Vec<PublicAccessEntrySlim> {
        self.saved.lock().unwrap().clone()
    }

    fn store(&self, slim: PublicAccessEntrySlim) -> PublicAccessEntry {
        let rules = slim
            .member_user_names
            .iter()
            .map(|name| PublicAccessRule::member_username(name.as_str()))
            .chain(slim.member_group_names.iter().map(|name| PublicAccessRule::member_role(name.as_str())))
            .collect::<Vec<_>>();
        let entry = PublicAccessEntry::new(
            Uuid::new_v4(),
            NodeId(PROTECTED_NODE),
            NodeId(LOGIN_NODE),
            NodeId(ERROR_NODE),
            rules,
        );
        self.insert(EntityKey::from_uuid(slim.content_id), entry.clone());
        self.saved.lock().unwrap().push(slim);
        entry
    }
}

#[async_trait]
impl PublicAccessService for FakePublicAccessService {
    async fn get_entry_for_content(&self, content_key: EntityKey) -> VellumResult<PublicAccessEntry> {
        self.entries
            .lock()
            .unwrap()
            .get(&content_key)
            .cloned()
            .ok_or_else(|| PublicAccessOperationStatus::EntryNotFound.into())
    }

    async fn create(&self, entry: PublicAccessEntrySlim) -> VellumResult<PublicAccessEntry> {
        Ok(self.store(entry))
    }

    async fn update(&self, entry: PublicAccessEntrySlim) -> VellumResult<PublicAccessEntry> {
        let content_key = EntityKey::from_uuid(entry.content_id);
        if !self.entries.lock().unwrap().contains_key(&content_key) {
            return Err(PublicAccessOperationStatus::EntryNotFound.into());
        }
        Ok(self.store(entry))
    }

    async fn delete(&self, content_key: EntityKey) -> VellumResult<()> {
        self.entries
            .lock()
            .unwrap()
            .remove(&content_key)
            .map(|_| ())
            .ok_or_else(|| PublicAccessOperationStatus::EntryNotFound.into())
    }
}

/// Builder for a router state backed by the fakes above.
///
/// The protected, login and error nodes resolve to `protected_key`,
/// `login_key` and `error_key` unless removed with `without_document`.
pub struct TestApp {
    pub protected_key: EntityKey,
    pub login_key: EntityKey,
    pub error_key: EntityKey,
    pub service: Arc<FakePublicAccessService>,
    entities: FakeEntities,
    members: FakeMembers,
    roles: FakeRoles,
}

impl TestApp {
    pub fn new() -> Self {
        let protected_key = EntityKey::new();
        let login_key = EntityKey::new();
        let error_key = EntityKey::new();
        let documents = HashMap::from([
            (NodeId(PROTECTED_NODE), protected_key),
            (NodeId(LOGIN_NODE), login_key),
            (NodeId(ERROR_NODE), error_key),
        ]);

        Self {
            protected_key,
            login_key,
            error_key,
            service: Arc::new(FakePublicAccessService::default()),
            entities: FakeEntities {
                documents,
                groups: Vec::new(),
            },
            members: FakeMembers::default(),
            roles: FakeRoles::default(),
        }
    }

    pub fn with_member(mut self, username: &str) -> Self {
        let id = 1000 + self.members.members.len() as i32;
        self.members.members.push(Member {
            id: NodeId(id),
            key: EntityKey::new(),
            username: username.to_string(),
            name: username.to_string(),
            member_type_key: EntityKey::new(),
        });
        self
    }

    pub fn with_group(mut self, id: i32, name: &str) -> Self {
        self.roles.roles.push(MemberRole::new(id.to_string(), name));
        self.entities.groups.push(EntitySlim {
            id: NodeId(id),
            key: EntityKey::new(),
            name: Some(name.to_string()),
            object_type: ObjectType::MemberGroup,
        });
        self
    }

    pub fn without_document(mut self, node: i32) -> Self {
        self.entities.documents.remove(&NodeId(node));
        self
    }

    pub fn state(&self) -> AppState {
        let entities = FakeEntities {
            documents: self.entities.documents.clone(),
            groups: self.entities.groups.clone(),
        };
        let factory = PublicAccessPresentationFactoryImpl::new(
            Arc::new(entities),
            Arc::new(FakeMembers {
                members: self.members.members.clone(),
            }),
            Arc::new(FakeRoles {
                roles: self.roles.roles.clone(),
            }),
            Arc::new(DefaultMemberGroupMapper {}),
            Arc::new(DefaultMemberPresentationFactory {}),
        );

        AppState::new(Arc::new(factory), self.service.clone())
    }
}
