//! Public access rule type value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of principal a public access rule grants access to.
///
/// Rules are persisted with a free-form type string; only the two values
/// below carry meaning. Anything else is ignored when a rule set is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum RuleType {
    /// The rule value is a member username.
    MemberUsername,
    /// The rule value is a member role (group) name.
    MemberRole,
}

impl RuleType {
    /// Persisted type string for username rules.
    pub const MEMBER_USERNAME: &'static str = "MemberUsername";

    /// Persisted type string for role rules.
    pub const MEMBER_ROLE: &'static str = "MemberRole";

    /// Returns the persisted type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MemberUsername => Self::MEMBER_USERNAME,
            Self::MemberRole => Self::MEMBER_ROLE,
        }
    }

    /// Parses a persisted type string. Matching is exact.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            Self::MEMBER_USERNAME => Some(Self::MemberUsername),
            Self::MEMBER_ROLE => Some(Self::MemberRole),
            _ => None,
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
