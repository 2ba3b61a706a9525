//! Typed client for the travel backend API.
//!
//! This is the admin tooling's view of the backend. Most operations collapse
//! failures into a sentinel value (empty list, None, false) after logging
//! them, so callers render an empty state instead of handling errors;
//! [`ApiClient::create_package`] is the one operation that re-signals
//! failure.

use std::fmt;

use crate::models::{
    CreatePackageRequest, Package, UpdateContentRequest, UpdatePackageRequest, WebsiteContent,
};

/// Failure inside the client facade.
#[derive(Debug)]
pub enum ClientError {
    /// The request never completed (connection refused, timeout, bad body).
    Transport(reqwest::Error),
    /// The server answered with a non-success status.
    Status(reqwest::StatusCode),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(e) => write!(f, "request failed: {}", e),
            ClientError::Status(status) => write!(f, "server answered {}", status),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err)
    }
}

/// HTTP client bound to one backend instance.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// A client talking to `base_url`, e.g. `http://localhost:5000`.
    /// The `/api` prefix is appended internally, not by callers.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.http.get(self.url(path)).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Fetch the whole catalog. Collapses to an empty list on failure.
    pub async fn fetch_packages(&self) -> Vec<Package> {
        match self.get_json("/packages").await {
            Ok(packages) => packages,
            Err(e) => {
                tracing::error!("Error fetching packages: {}", e);
                Vec::new()
            }
        }
    }

    /// Fetch a single package. None covers both "missing" and "unreachable".
    pub async fn fetch_package_by_id(&self, id: &str) -> Option<Package> {
        match self.get_json(&format!("/packages/{}", id)).await {
            Ok(package) => Some(package),
            Err(e) => {
                tracing::error!("Error fetching package: {}", e);
                None
            }
        }
    }

    /// Create a package. The caller must see this one fail, so it returns a
    /// real Result instead of a sentinel.
    pub async fn create_package(
        &self,
        request: &CreatePackageRequest,
    ) -> Result<Package, ClientError> {
        match self.post_json("/packages", request).await {
            Ok(package) => Ok(package),
            Err(e) => {
                tracing::error!("Error creating package: {}", e);
                Err(e)
            }
        }
    }

    /// Update a package. None for unknown ids, rejected patches and
    /// transport failures alike.
    pub async fn update_package(
        &self,
        id: &str,
        request: &UpdatePackageRequest,
    ) -> Option<Package> {
        match self.put_json(&format!("/packages/{}", id), request).await {
            Ok(package) => Some(package),
            Err(e) => {
                tracing::error!("Error updating package: {}", e);
                None
            }
        }
    }

    /// Delete a package. True only when the server confirmed the delete.
    pub async fn delete_package(&self, id: &str) -> bool {
        let response = self
            .http
            .delete(self.url(&format!("/packages/{}", id)))
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::error!(
                    "Error deleting package: {}",
                    ClientError::Status(response.status())
                );
                false
            }
            Err(e) => {
                tracing::error!("Error deleting package: {}", ClientError::Transport(e));
                false
            }
        }
    }

    /// Fetch one page's content.
    pub async fn fetch_content_by_page(&self, page: &str) -> Option<WebsiteContent> {
        match self.get_json(&format!("/content/{}", page)).await {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::error!("Error fetching content: {}", e);
                None
            }
        }
    }

    /// Update one page's content. None for unknown pages and for failures.
    pub async fn update_content_by_page(
        &self,
        page: &str,
        request: &UpdateContentRequest,
    ) -> Option<WebsiteContent> {
        match self.put_json(&format!("/content/{}", page), request).await {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::error!("Error updating content: {}", e);
                None
            }
        }
    }

    /// List the editable page keys.
    pub async fn get_all_pages(&self) -> Vec<String> {
        match self.get_json("/content").await {
            Ok(pages) => pages,
            Err(e) => {
                tracing::error!("Error fetching pages: {}", e);
                Vec::new()
            }
        }
    }
}
