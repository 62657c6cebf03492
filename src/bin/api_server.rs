// src/bin/api_server.rs

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use saborexpress::infra::config::ServerSettings;
use saborexpress::infra::logging;
use saborexpress::transport;
use saborexpress::{CatalogService, JsonFileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let settings = ServerSettings::parse();
    logging::init_server_logger(settings.verbose);

    // --- Registry Initialization ---
    let data_file = settings.storage.data_file_path();
    tracing::info!(path = %data_file.display(), "loading establishments");
    let store = Arc::new(JsonFileStore::new(data_file));
    let service = CatalogService::open(store).await;
    let app_state = transport::http::AppState::new(service);

    // --- API Server Initialization ---
    let app = transport::http::create_app(app_state.clone());
    let listener = tokio::net::TcpListener::bind(&settings.bind)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind))?;
    tracing::info!(addr = %settings.bind, "API server listening");
    tracing::info!("Swagger UI available at /swagger-ui");
    tracing::info!("Press Ctrl+C to save the registry and shut down");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received, saving registry");
            let catalog = app_state.catalog.lock().await;
            if let Err(e) = catalog.save().await {
                tracing::error!(error = %e, "final save failed");
            }
            tracing::info!("graceful shutdown complete");
        }
    }

    Ok(())
}
