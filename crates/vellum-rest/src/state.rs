//! Application state for Axum handlers.

use shaku::{HasComponent, Module};
use std::sync::Arc;
use vellum_service::{PublicAccessPresentationFactory, PublicAccessService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub public_access_factory: Arc<dyn PublicAccessPresentationFactory>,
    pub public_access_service: Arc<dyn PublicAccessService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        public_access_factory: Arc<dyn PublicAccessPresentationFactory>,
        public_access_service: Arc<dyn PublicAccessService>,
    ) -> Self {
        Self {
            public_access_factory,
            public_access_service,
        }
    }

    /// Resolves the state's components from a shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module
            + HasComponent<dyn PublicAccessPresentationFactory>
            + HasComponent<dyn PublicAccessService>,
    {
        Self {
            public_access_factory: module.resolve(),
            public_access_service: module.resolve(),
        }
    }
}
