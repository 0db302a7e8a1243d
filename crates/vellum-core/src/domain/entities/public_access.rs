//! Public access entry entity.

use super::super::value_objects::RuleType;
use crate::NodeId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single allow-list rule of a public access entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicAccessRule {
    /// Persisted rule type string, see [`RuleType`].
    pub rule_type: String,
    /// Username or role name, depending on the rule type.
    pub rule_value: Option<String>,
}

impl PublicAccessRule {
    /// Creates a rule from raw persisted values.
    #[must_use]
    pub fn new(rule_type: impl Into<String>, rule_value: Option<String>) -> Self {
        Self {
            rule_type: rule_type.into(),
            rule_value,
        }
    }

    /// Creates a rule granting access to a single member.
    #[must_use]
    pub fn member_username(username: impl Into<String>) -> Self {
        Self::new(RuleType::MEMBER_USERNAME, Some(username.into()))
    }

    /// Creates a rule granting access to every member of a role.
    #[must_use]
    pub fn member_role(role_name: impl Into<String>) -> Self {
        Self::new(RuleType::MEMBER_ROLE, Some(role_name.into()))
    }

    /// Returns the parsed rule type, or `None` for unknown types.
    #[must_use]
    pub fn kind(&self) -> Option<RuleType> {
        RuleType::parse(&self.rule_type)
    }

    /// Returns true if this rule is of the given type.
    #[must_use]
    pub fn is(&self, rule_type: RuleType) -> bool {
        self.kind() == Some(rule_type)
    }
}

/// Public access configuration protecting a document and its descendants.
///
/// Entries are loaded from persistence and not mutated afterwards, so the
/// fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicAccessEntry {
    key: Uuid,
    protected_node_id: NodeId,
    login_node_id: NodeId,
    no_access_node_id: NodeId,
    rules: Vec<PublicAccessRule>,
}

impl PublicAccessEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(
        key: Uuid,
        protected_node_id: NodeId,
        login_node_id: NodeId,
        no_access_node_id: NodeId,
        rules: impl IntoIterator<Item = PublicAccessRule>,
    ) -> Self {
        Self {
            key,
            protected_node_id,
            login_node_id,
            no_access_node_id,
            rules: rules.into_iter().collect(),
        }
    }

    /// Key of the entry itself.
    #[must_use]
    pub const fn key(&self) -> Uuid {
        self.key
    }

    /// Node the entry is attached to.
    #[must_use]
    pub const fn protected_node_id(&self) -> NodeId {
        self.protected_node_id
    }

    /// Node visitors are sent to when they are not logged in.
    #[must_use]
    pub const fn login_node_id(&self) -> NodeId {
        self.login_node_id
    }

    /// Node visitors are sent to when they lack access.
    #[must_use]
    pub const fn no_access_node_id(&self) -> NodeId {
        self.no_access_node_id
    }

    /// Rules in persisted order.
    #[must_use]
    pub fn rules(&self) -> &[PublicAccessRule] {
        &self.rules
    }

    /// Values of the rules of the given type, in persisted order.
    ///
    /// Rules without a value are skipped.
    pub fn rule_values(&self, rule_type: RuleType) -> impl Iterator<Item = &str> + '_ {
        self.rules
            .iter()
            .filter(move |rule| rule.is(rule_type))
            .filter_map(|rule| rule.rule_value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rules: Vec<PublicAccessRule>) -> PublicAccessEntry {
        PublicAccessEntry::new(Uuid::new_v4(), NodeId(100), NodeId(200), NodeId(300), rules)
    }

    #[test]
    fn test_rule_constructors() {
        let username = PublicAccessRule::member_username("john.doe");
        assert_eq!(username.rule_type, "MemberUsername");
        assert_eq!(username.kind(), Some(RuleType::MemberUsername));

        let role = PublicAccessRule::member_role("Editors");
        assert_eq!(role.rule_type, "MemberRole");
        assert!(role.is(RuleType::MemberRole));
    }

    #[test]
    fn test_unknown_rule_type() {
        let rule = PublicAccessRule::new("Legacy", Some("x".to_string()));
        assert_eq!(rule.kind(), None);
        assert!(!rule.is(RuleType::MemberRole));
    }

    #[test]
    fn test_rule_values_partition_and_keep_order() {
        let entry = entry(vec![
            PublicAccessRule::member_username("b"),
            PublicAccessRule::member_role("Editors"),
            PublicAccessRule::member_username("a"),
            PublicAccessRule::new(RuleType::MEMBER_USERNAME, None),
            PublicAccessRule::new("Legacy", Some("c".to_string())),
        ]);

        let usernames: Vec<&str> = entry.rule_values(RuleType::MemberUsername).collect();
        assert_eq!(usernames, vec!["b", "a"]);

        let roles: Vec<&str> = entry.rule_values(RuleType::MemberRole).collect();
        assert_eq!(roles, vec!["Editors"]);
    }

    #[test]
    fn test_accessors() {
        let entry = entry(Vec::new());
        assert_eq!(entry.protected_node_id(), NodeId(100));
        assert_eq!(entry.login_node_id(), NodeId(200));
        assert_eq!(entry.no_access_node_id(), NodeId(300));
        assert!(entry.rules().is_empty());
    }
}
