mod config;
mod dto;
mod handlers;
mod models;
mod repository;
mod service;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use config::StoreConfig;
use handlers::rest;
use repository::{MemoryStore, NoteStore, PostgresStore};
use service::NoteService;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load config
    let cfg = config::load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {e}");
        panic!("failed to locate or load config: {e}");
    });
    tracing::info!("Successfully loaded notes server config");

    // Store creation, shared by every request
    let store: Arc<dyn NoteStore> = match cfg.store {
        StoreConfig::Postgres { ref dsn, ref table } => {
            let store = PostgresStore::connect(dsn, table).await.unwrap_or_else(|e| {
                tracing::error!("Failed to set up database: {e}");
                panic!("failed to set up database: {e}");
            });
            Arc::new(store)
        }
        StoreConfig::Memory => {
            tracing::warn!("Using the in-memory store, notes will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    // Service and router
    let service = Arc::new(NoteService::new(store));
    let router = rest::router(service, cfg.openapi);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cfg.port))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to port {}: {e}", cfg.port);
            panic!("failed to bind to port {}: {e}", cfg.port);
        });

    match listener.local_addr() {
        Ok(addr) => tracing::info!("Notes server starting, listening on {}", addr),
        Err(e) => tracing::warn!("Notes server starting, local address unknown: {e}"),
    }
    if cfg.openapi {
        tracing::info!("Swagger UI available at /swagger-ui");
    }

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!("HTTP server error: {e}");
        panic!("failed to start HTTP server: {e}");
    }
}
