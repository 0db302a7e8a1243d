//! Entity-DTO mappers.
//!
//! Straight field mappings are `From` impls on the DTOs; the components
//! below expose them through the collaborator traits so they can be
//! registered in a shaku module.

use crate::collaborators::{MemberGroupMapper, MemberPresentationFactory};
use crate::dto::{MemberGroupItemResponse, MemberItemResponse, ReferenceById};
use shaku::Component;
use vellum_core::{EntitySlim, Member};

impl From<&EntitySlim> for MemberGroupItemResponse {
    fn from(entity: &EntitySlim) -> Self {
        Self {
            id: entity.key.into_inner(),
            name: entity.name.clone().unwrap_or_default(),
        }
    }
}

impl From<&Member> for MemberItemResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.key.into_inner(),
            username: member.username.clone(),
            name: member.name.clone(),
            member_type: ReferenceById::new(member.member_type_key.into_inner()),
        }
    }
}

/// Default member group mapper.
#[derive(Component, Debug, Default)]
#[shaku(interface = MemberGroupMapper)]
pub struct DefaultMemberGroupMapper {}

impl MemberGroupMapper for DefaultMemberGroupMapper {
    fn map(&self, entity: &EntitySlim) -> MemberGroupItemResponse {
        MemberGroupItemResponse::from(entity)
    }
}

/// Default member presentation factory.
#[derive(Component, Debug, Default)]
#[shaku(interface = MemberPresentationFactory)]
pub struct DefaultMemberPresentationFactory {}

impl MemberPresentationFactory for DefaultMemberPresentationFactory {
    fn create_item_response(&self, member: &Member) -> MemberItemResponse {
        MemberItemResponse::from(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_core::{EntityKey, NodeId, ObjectType};

    #[test]
    fn test_member_group_mapping() {
        let key = EntityKey::new();
        let entity = EntitySlim {
            id: NodeId(42),
            key,
            name: Some("Editors".to_string()),
            object_type: ObjectType::MemberGroup,
        };

        let group = DefaultMemberGroupMapper {}.map(&entity);
        assert_eq!(group.id, key.into_inner());
        assert_eq!(group.name, "Editors");
    }

    #[test]
    fn test_unnamed_member_group_maps_to_empty_name() {
        let entity = EntitySlim {
            id: NodeId(1),
            key: EntityKey::new(),
            name: None,
            object_type: ObjectType::MemberGroup,
        };

        assert_eq!(DefaultMemberGroupMapper {}.map(&entity).name, "");
    }

    #[test]
    fn test_member_item_mapping() {
        let member = Member {
            id: NodeId(1200),
            key: EntityKey::new(),
            username: "jane.doe".to_string(),
            name: "Jane Doe".to_string(),
            member_type_key: EntityKey::new(),
        };

        let item = DefaultMemberPresentationFactory {}.create_item_response(&member);
        assert_eq!(item.id, member.key.into_inner());
        assert_eq!(item.username, "jane.doe");
        assert_eq!(item.member_type.id, member.member_type_key.into_inner());
    }
}
