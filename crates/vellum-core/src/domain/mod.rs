//! Domain entities and value objects for public access management.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
