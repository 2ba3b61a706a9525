//! Persistence layer for packages and website content.
//!
//! One [`Store`] interface, two interchangeable backends: [`SqliteStore`]
//! persists to a database file and is the default, [`MemoryStore`] keeps
//! everything in process memory for demos and tests. The HTTP layer only
//! ever sees the trait, so which backend serves a deployment is purely a
//! configuration choice.

mod memory;
mod seed;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::{init_database, SqliteStore};

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{
    CreatePackageRequest, Package, UpdateContentRequest, UpdatePackageRequest, WebsiteContent,
};

/// CRUD operations over the package catalog and the website content set.
///
/// Backends must agree on observable behavior so they can be swapped without
/// touching the handlers: same validation, same shallow-merge rules, same
/// not-found signaling. Writes are last-write-wins; there is no version
/// checking anywhere in this interface.
#[async_trait]
pub trait Store: Send + Sync {
    /// List all packages in creation order.
    async fn list_packages(&self) -> Result<Vec<Package>, AppError>;

    /// Exact-match lookup by id.
    async fn get_package(&self, id: &str) -> Result<Option<Package>, AppError>;

    /// Validate the request, assign a fresh id and timestamps, and store the
    /// new package.
    async fn create_package(&self, request: &CreatePackageRequest) -> Result<Package, AppError>;

    /// Shallow-merge the patch onto the stored record, refresh `updated_at`,
    /// re-validate and persist. Fails with [`AppError::NotFound`] for an
    /// unknown id.
    async fn update_package(
        &self,
        id: &str,
        request: &UpdatePackageRequest,
    ) -> Result<Package, AppError>;

    /// Remove a package, reporting whether a record was actually removed.
    async fn delete_package(&self, id: &str) -> Result<bool, AppError>;

    /// List the known page keys.
    async fn list_pages(&self) -> Result<Vec<String>, AppError>;

    /// Fetch one page's content document.
    async fn get_content(&self, page: &str) -> Result<Option<WebsiteContent>, AppError>;

    /// Shallow-merge the patch onto a page document and refresh
    /// `updated_at`. The only mutator for content; pages are never created
    /// or deleted at runtime.
    async fn update_content(
        &self,
        page: &str,
        request: &UpdateContentRequest,
    ) -> Result<WebsiteContent, AppError>;
}
