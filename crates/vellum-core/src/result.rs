//! Result type aliases for Vellum.

use crate::{PublicAccessOperationStatus, VellumError};

/// A specialized `Result` type for Vellum operations.
pub type VellumResult<T> = Result<T, VellumError>;

/// Result of a public access operation, failing with a typed status.
pub type PublicAccessResult<T> = Result<T, PublicAccessOperationStatus>;
