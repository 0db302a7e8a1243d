//! HTTP application assembly and serving.

use crate::di::build_in_memory_module;
use crate::store::Catalog;
use axum::Router;
use shaku::{HasComponent, Module};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info};
use vellum_config::{AppConfig, ServerConfig};
use vellum_core::{VellumError, VellumResult};
use vellum_rest::create_router;
use vellum_service::{PublicAccessPresentationFactory, PublicAccessService};

/// Builds the REST router with the server-level request timeout applied.
pub fn build_app<M>(module: &M, server_config: &ServerConfig) -> Router
where
    M: Module
        + HasComponent<dyn PublicAccessPresentationFactory>
        + HasComponent<dyn PublicAccessService>,
{
    create_router(module, server_config).layer(TimeoutLayer::new(server_config.request_timeout()))
}

/// Serves the API over `catalog` until a shutdown signal arrives.
pub async fn serve(config: AppConfig, catalog: Arc<Catalog>) -> VellumResult<()> {
    let module = build_in_memory_module(catalog);
    let router = build_app(module.as_ref(), &config.server);

    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| VellumError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    info!(
        timeout_secs = config.server.request_timeout_secs,
        "Starting REST server on http://{}", addr
    );
    info!("API Docs:  http://{}/swagger-ui", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| VellumError::Internal(format!("REST server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_app_serves_health() {
        let module = build_in_memory_module(Arc::new(Catalog::new()));
        let app = build_app(module.as_ref(), &ServerConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_app_reports_unknown_document() {
        let module = build_in_memory_module(Arc::new(Catalog::new()));
        let app = build_app(module.as_ref(), &ServerConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/document/00000000-0000-0000-0000-000000000000/public-access")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
