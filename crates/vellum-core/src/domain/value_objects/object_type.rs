//! Content object type value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of entity stored in the content tree.
///
/// Identifier lookups are scoped by object type: the same integer id may
/// name a document in one table and a member group in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    /// A content document.
    Document,
    /// A member (front-end user).
    Member,
    /// A member group (role).
    MemberGroup,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => write!(f, "document"),
            Self::Member => write!(f, "member"),
            Self::MemberGroup => write!(f, "member_group"),
        }
    }
}
