//! Travel package CMS backend.
//!
//! REST backend for a travel agency site: a tour package catalog with full
//! CRUD and a small set of editable marketing pages, persisted in SQLite or
//! in memory behind a single store trait. Also ships [`client::ApiClient`],
//! the typed facade the admin tooling talks through.

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use store::Store;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Packages
        .route("/packages", get(api::list_packages))
        .route("/packages", post(api::create_package))
        .route("/packages/{id}", get(api::get_package))
        .route("/packages/{id}", put(api::update_package))
        .route("/packages/{id}", delete(api::delete_package))
        // Website content
        .route("/content", get(api::list_pages))
        .route("/content/{page}", get(api::get_content))
        .route("/content/{page}", put(api::update_content));

    Router::new()
        .nest("/api", api_routes)
        .route("/", get(root))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint, a plain banner for smoke checks.
async fn root() -> &'static str {
    "Travel API is running"
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
