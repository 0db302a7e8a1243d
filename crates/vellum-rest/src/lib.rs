//! # Vellum REST
//!
//! REST API layer using Axum for the Vellum management API.
//! Provides the document public access endpoints and health checks.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;

pub use router::*;
pub use state::*;
