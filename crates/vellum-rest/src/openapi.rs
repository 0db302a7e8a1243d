//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use utoipa::OpenApi;
use vellum_core::{ErrorResponse, PublicAccessOperationStatus};
use vellum_service::{
    MemberGroupItemResponse, MemberItemResponse, PublicAccessRequest, PublicAccessResponse,
    ReferenceById,
};

/// OpenAPI documentation for the Vellum management API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vellum Management API",
        version = "1.0.0",
        description = "Back-office API for Vellum content management",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        crate::controllers::public_access_controller::get_public_access,
        crate::controllers::public_access_controller::create_public_access,
        crate::controllers::public_access_controller::update_public_access,
        crate::controllers::public_access_controller::delete_public_access,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            PublicAccessOperationStatus,
            ReferenceById,
            MemberItemResponse,
            MemberGroupItemResponse,
            PublicAccessRequest,
            PublicAccessResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "public-access", description = "Document public access endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
