//! REST API controllers.

pub mod health_controller;
pub mod public_access_controller;

pub use health_controller::*;
