//! # Vellum Service
//!
//! Presentation factories for the management API, together with the
//! contracts of the services they consume.

pub mod collaborators;
pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod public_access_presentation_factory;

pub use collaborators::*;
pub use dto::*;
pub use mappers::*;
pub use public_access_presentation_factory::*;
pub use r#impl::*;
