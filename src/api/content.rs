//! Website content API endpoints.
//!
//! Content is read and updated, never created or deleted; the set of pages
//! is fixed at store initialization.

use axum::{
    extract::{Path, State},
    Json,
};

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{UpdateContentRequest, WebsiteContent};
use crate::AppState;

/// GET /api/content - List the available page keys.
pub async fn list_pages(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    let pages = state.store.list_pages().await?;
    Ok(Json(pages))
}

/// GET /api/content/{page} - Get a single page's content.
pub async fn get_content(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> ApiResult<WebsiteContent> {
    let content = state
        .store
        .get_content(&page)
        .await?
        .ok_or_else(|| AppError::NotFound("Content not found".to_string()))?;

    Ok(Json(content))
}

/// PUT /api/content/{page} - Update a single page's content.
pub async fn update_content(
    State(state): State<AppState>,
    Path(page): Path<String>,
    Json(request): Json<UpdateContentRequest>,
) -> ApiResult<WebsiteContent> {
    let content = state.store.update_content(&page, &request).await?;
    Ok(Json(content))
}
