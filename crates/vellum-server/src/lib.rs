//! # Vellum Server
//!
//! Standalone server for the Vellum management API: dependency injection
//! wiring, the in-memory content catalog, and HTTP serving.

pub mod app;
pub mod di;
pub mod store;

pub use app::*;
pub use di::*;
