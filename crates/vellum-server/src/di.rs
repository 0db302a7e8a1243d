//! Dependency injection module using Shaku.

use crate::store::{
    Catalog, InMemoryEntityService, InMemoryEntityServiceParameters, InMemoryMemberRoleManager,
    InMemoryMemberRoleManagerParameters, InMemoryMemberService, InMemoryMemberServiceParameters,
    InMemoryPublicAccessService, InMemoryPublicAccessServiceParameters,
};
use shaku::module;
use std::sync::Arc;
use vellum_service::{
    DefaultMemberGroupMapper, DefaultMemberPresentationFactory,
    PublicAccessPresentationFactoryImpl,
};

// Standalone module: the presentation factory over an in-memory catalog.
module! {
    pub InMemoryModule {
        components = [
            InMemoryEntityService,
            InMemoryMemberService,
            InMemoryMemberRoleManager,
            InMemoryPublicAccessService,
            DefaultMemberGroupMapper,
            DefaultMemberPresentationFactory,
            PublicAccessPresentationFactoryImpl,
        ],
        providers = [],
    }
}

/// Builds the in-memory module with every store component sharing `catalog`.
pub fn build_in_memory_module(catalog: Arc<Catalog>) -> Arc<InMemoryModule> {
    let module = InMemoryModule::builder()
        .with_component_parameters::<InMemoryEntityService>(InMemoryEntityServiceParameters {
            catalog: catalog.clone(),
        })
        .with_component_parameters::<InMemoryMemberService>(InMemoryMemberServiceParameters {
            catalog: catalog.clone(),
        })
        .with_component_parameters::<InMemoryMemberRoleManager>(
            InMemoryMemberRoleManagerParameters {
                catalog: catalog.clone(),
            },
        )
        .with_component_parameters::<InMemoryPublicAccessService>(
            InMemoryPublicAccessServiceParameters { catalog },
        )
        .build();

    Arc::new(module)
}
