//! Configuration module for the travel backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Which persistence backend serves this deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Durable SQLite file, the default.
    Sqlite,
    /// Process-local memory, pre-seeded with demo data. For demos and tests.
    Memory,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Persistence backend selection
    pub store: StoreBackend,
    /// Path to SQLite database file (ignored by the memory backend)
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let store = match env::var("TRAVEL_STORE").as_deref() {
            Ok("memory") => StoreBackend::Memory,
            _ => StoreBackend::Sqlite,
        };

        let db_path = env::var("TRAVEL_DB_PATH")
            .unwrap_or_else(|_| "./data/travel.sqlite".to_string())
            .into();

        let bind_addr = env::var("TRAVEL_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .expect("Invalid TRAVEL_BIND_ADDR format");

        let log_level = env::var("TRAVEL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            store,
            db_path,
            bind_addr,
            log_level,
        }
    }
}
