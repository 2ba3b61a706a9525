//! Travel Backend server binary.
//!
//! Wires configuration, logging and the selected store backend together and
//! serves the REST API.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use travelscribe_backend::config::{Config, StoreBackend};
use travelscribe_backend::store::{self, MemoryStore, SqliteStore, Store};
use travelscribe_backend::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Travel Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize the selected store backend
    let store: Arc<dyn Store> = match config.store {
        StoreBackend::Sqlite => {
            tracing::info!("Database path: {:?}", config.db_path);
            let pool = store::init_database(&config.db_path).await?;
            Arc::new(SqliteStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store. All changes are lost on shutdown!");
            Arc::new(MemoryStore::seeded())
        }
    };

    // Create application state
    let state = AppState { store };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
