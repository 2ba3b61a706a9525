//! In-memory store backend.
//!
//! An explicit instance owning its data: construct with [`MemoryStore::new`]
//! or [`MemoryStore::seeded`], drop it to discard. No process-wide state is
//! involved, so tests can run isolated stores side by side.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{seed, Store};
use crate::errors::AppError;
use crate::models::{
    CreatePackageRequest, Package, UpdateContentRequest, UpdatePackageRequest, WebsiteContent,
};

/// Store backend holding both collections in process memory.
///
/// Lists come back in insertion order. Mutations take the write lock for the
/// duration of the operation, but there is deliberately no versioning: two
/// racing updates to one id resolve to whichever write lands last.
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    packages: Vec<Package>,
    content: Vec<WebsiteContent>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryInner::default()),
        }
    }

    /// A store pre-loaded with the demo catalog and default site content.
    pub fn seeded() -> Self {
        Self::with_data(seed::packages(), seed::website_content())
    }

    /// A store initialized with the given collections.
    pub fn with_data(packages: Vec<Package>, content: Vec<WebsiteContent>) -> Self {
        Self {
            inner: RwLock::new(MemoryInner { packages, content }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_packages(&self) -> Result<Vec<Package>, AppError> {
        Ok(self.inner.read().await.packages.clone())
    }

    async fn get_package(&self, id: &str) -> Result<Option<Package>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.packages.iter().find(|p| p.id == id).cloned())
    }

    async fn create_package(&self, request: &CreatePackageRequest) -> Result<Package, AppError> {
        request.validate()?;

        let package =
            request.to_package(uuid::Uuid::new_v4().to_string(), Utc::now().to_rfc3339());
        let mut inner = self.inner.write().await;
        inner.packages.push(package.clone());
        Ok(package)
    }

    async fn update_package(
        &self,
        id: &str,
        request: &UpdatePackageRequest,
    ) -> Result<Package, AppError> {
        let mut inner = self.inner.write().await;
        let position = inner
            .packages
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Package not found".to_string()))?;

        let mut merged = request.merge_onto(&inner.packages[position]);
        merged.updated_at = Utc::now().to_rfc3339();
        merged.validate()?;

        inner.packages[position] = merged.clone();
        Ok(merged)
    }

    async fn delete_package(&self, id: &str) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let before = inner.packages.len();
        inner.packages.retain(|p| p.id != id);
        Ok(inner.packages.len() < before)
    }

    async fn list_pages(&self) -> Result<Vec<String>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.content.iter().map(|c| c.page.clone()).collect())
    }

    async fn get_content(&self, page: &str) -> Result<Option<WebsiteContent>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.content.iter().find(|c| c.page == page).cloned())
    }

    async fn update_content(
        &self,
        page: &str,
        request: &UpdateContentRequest,
    ) -> Result<WebsiteContent, AppError> {
        let mut inner = self.inner.write().await;
        let position = inner
            .content
            .iter()
            .position(|c| c.page == page)
            .ok_or_else(|| AppError::NotFound("Content not found".to_string()))?;

        let mut merged = request.merge_onto(&inner.content[position]);
        merged.updated_at = Utc::now().to_rfc3339();

        inner.content[position] = merged.clone();
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str) -> CreatePackageRequest {
        CreatePackageRequest {
            title: title.to_string(),
            description: "A test package".to_string(),
            price: Some(100.0),
            duration: "3 days".to_string(),
            location: "Testland".to_string(),
            image_url: "http://example.com/test.jpg".to_string(),
            people: None,
            rating: None,
            reviews: None,
            itinerary: vec![],
            inclusions: vec![],
            exclusions: vec![],
            faqs: vec![],
            featured: false,
        }
    }

    #[tokio::test]
    async fn test_seeded_store_contents() {
        let store = MemoryStore::seeded();

        let packages = store.list_packages().await.unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].title, "Bali Paradise Escape");

        let pages = store.list_pages().await.unwrap();
        assert_eq!(pages, vec!["home", "about"]);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryStore::new();
        for title in ["First", "Second", "Third"] {
            store.create_package(&request(title)).await.unwrap();
        }

        let titles: Vec<String> = store
            .list_packages()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let store = MemoryStore::new();
        let a = store.create_package(&request("A")).await.unwrap();
        let b = store.create_package(&request("B")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);
    }

    #[tokio::test]
    async fn test_delete_absent_returns_false() {
        let store = MemoryStore::new();
        assert!(!store.delete_package("missing").await.unwrap());

        let created = store.create_package(&request("Here")).await.unwrap();
        assert!(store.delete_package(&created.id).await.unwrap());
        assert!(!store.delete_package(&created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_unknown_page_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .update_content("nope", &UpdateContentRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
