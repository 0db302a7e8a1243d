//! Data Transfer Objects (DTOs).

mod member_dto;
mod public_access_dto;

pub use member_dto::*;
pub use public_access_dto::*;
