//! Document public access controller.

use crate::{
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, info};
use vellum_core::{EntityKey, ErrorResponse, VellumError};
use vellum_service::{PublicAccessRequest, PublicAccessResponse};

/// Creates the document router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/:id/public-access",
        get(get_public_access)
            .post(create_public_access)
            .put(update_public_access)
            .delete(delete_public_access),
    )
}

/// Get the public access settings that apply to a document.
#[utoipa::path(
    get,
    path = "/document/{id}/public-access",
    tag = "public-access",
    params(("id" = String, Path, description = "Document key")),
    responses(
        (status = 200, description = "Public access settings", body = PublicAccessResponse),
        (status = 400, description = "Malformed document key", body = ErrorResponse),
        (status = 404, description = "Document, login page, error page or entry not found", body = ErrorResponse)
    )
)]
pub async fn get_public_access(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<PublicAccessResponse> {
    debug!("Get public access request: {}", id);

    let content_key = parse_content_key(&id)?;
    let entry = state.public_access_service.get_entry_for_content(content_key).await?;
    let response = state
        .public_access_factory
        .create_public_access_response(&entry, content_key)?;

    ok(response)
}

/// Protect a document.
#[utoipa::path(
    post,
    path = "/document/{id}/public-access",
    tag = "public-access",
    params(("id" = String, Path, description = "Document key")),
    request_body = PublicAccessRequest,
    responses(
        (status = 201, description = "Public access created", body = PublicAccessResponse),
        (status = 400, description = "Malformed document key", body = ErrorResponse),
        (status = 404, description = "Document, login page or error page not found", body = ErrorResponse)
    )
)]
pub async fn create_public_access(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PublicAccessRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PublicAccessResponse>>), AppError> {
    debug!("Create public access request: {}", id);

    let content_key = parse_content_key(&id)?;
    let slim = state
        .public_access_factory
        .create_public_access_entry_slim(request, content_key);
    let entry = state.public_access_service.create(slim).await?;
    let response = state
        .public_access_factory
        .create_public_access_response(&entry, content_key)?;

    info!("Public access created for document: {}", content_key);
    Ok(created(response))
}

/// Replace the public access settings of a document.
#[utoipa::path(
    put,
    path = "/document/{id}/public-access",
    tag = "public-access",
    params(("id" = String, Path, description = "Document key")),
    request_body = PublicAccessRequest,
    responses(
        (status = 200, description = "Public access updated", body = PublicAccessResponse),
        (status = 400, description = "Malformed document key", body = ErrorResponse),
        (status = 404, description = "Document, login page, error page or entry not found", body = ErrorResponse)
    )
)]
pub async fn update_public_access(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PublicAccessRequest>,
) -> ApiResult<PublicAccessResponse> {
    debug!("Update public access request: {}", id);

    let content_key = parse_content_key(&id)?;
    let slim = state
        .public_access_factory
        .create_public_access_entry_slim(request, content_key);
    let entry = state.public_access_service.update(slim).await?;
    let response = state
        .public_access_factory
        .create_public_access_response(&entry, content_key)?;

    info!("Public access updated for document: {}", content_key);
    ok(response)
}

/// Remove the public access settings of a document.
#[utoipa::path(
    delete,
    path = "/document/{id}/public-access",
    tag = "public-access",
    params(("id" = String, Path, description = "Document key")),
    responses(
        (status = 204, description = "Public access removed"),
        (status = 400, description = "Malformed document key", body = ErrorResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse)
    )
)]
pub async fn delete_public_access(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete public access request: {}", id);

    let content_key = parse_content_key(&id)?;
    state.public_access_service.delete(content_key).await?;

    info!("Public access removed for document: {}", content_key);
    Ok(no_content())
}

fn parse_content_key(id: &str) -> Result<EntityKey, AppError> {
    EntityKey::parse(id)
        .map_err(|_| AppError(VellumError::validation(format!("Invalid document key: {}", id))))
}
