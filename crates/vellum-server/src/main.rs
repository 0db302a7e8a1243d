//! # Vellum Server
//!
//! Main entry point for the Vellum management API.

use std::sync::Arc;
use tracing::{error, info};
use vellum_config::ConfigLoader;
use vellum_core::telemetry::init_telemetry;
use vellum_core::VellumResult;
use vellum_server::{serve, store::Catalog};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        eprintln!("vellum-server: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> VellumResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    init_telemetry(&config.observability)?;

    info!("Starting Vellum management API...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    serve(config, Arc::new(Catalog::new())).await
}
