//! REST API module.
//!
//! Contains all API routes and handlers following the admin frontend
//! contract: bare JSON bodies, no response envelope.

mod content;
mod packages;

pub use content::*;
pub use packages::*;

use serde::Serialize;

/// Handler result carrying a bare JSON body.
pub type ApiResult<T> = Result<axum::Json<T>, crate::errors::AppError>;

/// Confirmation body for operations with nothing else to return.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
}
