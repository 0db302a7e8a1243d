//! Factory implementations.
//!
//! This module contains the concrete implementations of factory traits.
//! Trait definitions live in the parent module
//! (e.g. `public_access_presentation_factory.rs`).

pub mod public_access_presentation_factory_impl;

pub use public_access_presentation_factory_impl::PublicAccessPresentationFactoryImpl;
