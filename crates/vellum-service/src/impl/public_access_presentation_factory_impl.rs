//! Public access presentation factory implementation.

use crate::collaborators::{
    EntityService, MemberGroupMapper, MemberPresentationFactory, MemberRoleManager, MemberService,
};
use crate::dto::{
    MemberGroupItemResponse, MemberItemResponse, PublicAccessEntrySlim, PublicAccessRequest,
    PublicAccessResponse, ReferenceById,
};
use crate::public_access_presentation_factory::PublicAccessPresentationFactory;
use shaku::Component;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use vellum_core::{
    EntityKey, EntitySlim, MemberRole, NodeId, ObjectType, PublicAccessEntry,
    PublicAccessOperationStatus, PublicAccessResult, RuleType,
};

/// Public access presentation factory component for Shaku DI.
#[derive(Component)]
#[shaku(interface = PublicAccessPresentationFactory)]
pub struct PublicAccessPresentationFactoryImpl {
    #[shaku(inject)]
    entity_service: Arc<dyn EntityService>,
    #[shaku(inject)]
    member_service: Arc<dyn MemberService>,
    #[shaku(inject)]
    member_role_manager: Arc<dyn MemberRoleManager>,
    #[shaku(inject)]
    member_group_mapper: Arc<dyn MemberGroupMapper>,
    #[shaku(inject)]
    member_presentation_factory: Arc<dyn MemberPresentationFactory>,
}

impl PublicAccessPresentationFactoryImpl {
    /// Creates a factory outside of a shaku module.
    pub fn new(
        entity_service: Arc<dyn EntityService>,
        member_service: Arc<dyn MemberService>,
        member_role_manager: Arc<dyn MemberRoleManager>,
        member_group_mapper: Arc<dyn MemberGroupMapper>,
        member_presentation_factory: Arc<dyn MemberPresentationFactory>,
    ) -> Self {
        Self {
            entity_service,
            member_service,
            member_role_manager,
            member_group_mapper,
            member_presentation_factory,
        }
    }

    fn resolve_document_key(
        &self,
        node_id: NodeId,
        status: PublicAccessOperationStatus,
    ) -> PublicAccessResult<EntityKey> {
        self.entity_service
            .get_key(node_id, ObjectType::Document)
            .ok_or_else(|| {
                debug!(node_id = %node_id, status = ?status, "Document key could not be resolved");
                status
            })
    }

    /// Members named by username rules. Unknown usernames are skipped.
    fn resolve_members(&self, entry: &PublicAccessEntry) -> Vec<MemberItemResponse> {
        entry
            .rule_values(RuleType::MemberUsername)
            .filter_map(|username| {
                let member = self.member_service.get_by_username(username);
                if member.is_none() {
                    debug!(username, "Skipping rule for unknown member");
                }
                member
            })
            .map(|member| self.member_presentation_factory.create_item_response(&member))
            .collect()
    }

    /// Member groups named by role rules. Unknown roles are skipped.
    fn resolve_groups(&self, entry: &PublicAccessEntry) -> Vec<MemberGroupItemResponse> {
        let mut role_names = entry.rule_values(RuleType::MemberRole).peekable();
        if role_names.peek().is_none() {
            return Vec::new();
        }

        let mut roles_by_name: HashMap<String, MemberRole> = HashMap::new();
        for role in self.member_role_manager.roles() {
            if let Some(name) = role.name.clone() {
                roles_by_name.entry(name).or_insert(role);
            }
        }

        let group_ids: Vec<NodeId> = role_names
            .filter_map(|name| {
                let group_id = roles_by_name.get(name).and_then(MemberRole::group_id);
                if group_id.is_none() {
                    debug!(role = name, "Skipping rule for unknown member role");
                }
                group_id
            })
            .collect();

        if group_ids.is_empty() {
            return Vec::new();
        }

        let mut groups: HashMap<NodeId, EntitySlim> = self
            .entity_service
            .get_all(ObjectType::MemberGroup, &group_ids)
            .into_iter()
            .map(|entity| (entity.id, entity))
            .collect();

        // Batch lookups are unordered; emit groups in rule order, once each.
        group_ids
            .iter()
            .filter_map(|id| groups.remove(id))
            .map(|entity| self.member_group_mapper.map(&entity))
            .collect()
    }
}

impl PublicAccessPresentationFactory for PublicAccessPresentationFactoryImpl {
    fn create_public_access_response(
        &self,
        entry: &PublicAccessEntry,
        content_key: EntityKey,
    ) -> PublicAccessResult<PublicAccessResponse> {
        debug!(entry = %entry.key(), content = %content_key, "Creating public access response");

        let protected_node_key = self.resolve_document_key(
            entry.protected_node_id(),
            PublicAccessOperationStatus::ContentNotFound,
        )?;
        let login_node_key = self.resolve_document_key(
            entry.login_node_id(),
            PublicAccessOperationStatus::LoginNodeNotFound,
        )?;
        let error_node_key = self.resolve_document_key(
            entry.no_access_node_id(),
            PublicAccessOperationStatus::ErrorNodeNotFound,
        )?;

        let members = self.resolve_members(entry);
        let groups = self.resolve_groups(entry);

        debug!(
            members = members.len(),
            groups = groups.len(),
            "Resolved public access rules"
        );

        Ok(PublicAccessResponse {
            login_document: ReferenceById::new(login_node_key.into_inner()),
            error_document: ReferenceById::new(error_node_key.into_inner()),
            members,
            groups,
            is_protected_by_ancestor: protected_node_key != content_key,
        })
    }

    fn create_public_access_entry_slim(
        &self,
        request: PublicAccessRequest,
        content_key: EntityKey,
    ) -> PublicAccessEntrySlim {
        PublicAccessEntrySlim {
            content_id: content_key.into_inner(),
            member_user_names: request.member_user_names,
            member_group_names: request.member_group_names,
            error_page_id: request.error_document.id,
            login_page_id: request.login_document.id,
        }
    }
}

impl std::fmt::Debug for PublicAccessPresentationFactoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicAccessPresentationFactoryImpl").finish_non_exhaustive()
    }
}
