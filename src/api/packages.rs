//! Package API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{ApiMessage, ApiResult};
use crate::errors::AppError;
use crate::models::{CreatePackageRequest, Package, UpdatePackageRequest};
use crate::AppState;

/// GET /api/packages - List all packages.
pub async fn list_packages(State(state): State<AppState>) -> ApiResult<Vec<Package>> {
    let packages = state.store.list_packages().await?;
    Ok(Json(packages))
}

/// GET /api/packages/{id} - Get a single package.
pub async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Package> {
    let package = state
        .store
        .get_package(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Package not found".to_string()))?;

    Ok(Json(package))
}

/// POST /api/packages - Create a new package.
pub async fn create_package(
    State(state): State<AppState>,
    Json(request): Json<CreatePackageRequest>,
) -> Result<(StatusCode, Json<Package>), AppError> {
    let package = state.store.create_package(&request).await?;
    Ok((StatusCode::CREATED, Json(package)))
}

/// PUT /api/packages/{id} - Update a package.
pub async fn update_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdatePackageRequest>,
) -> ApiResult<Package> {
    let package = state.store.update_package(&id, &request).await?;
    Ok(Json(package))
}

/// DELETE /api/packages/{id} - Delete a package.
pub async fn delete_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ApiMessage> {
    let deleted = state.store.delete_package(&id).await?;
    if !deleted {
        return Err(AppError::NotFound("Package not found".to_string()));
    }

    Ok(Json(ApiMessage {
        message: "Package deleted successfully".to_string(),
    }))
}
