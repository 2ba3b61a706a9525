//! SQLite store backend.
//!
//! The durable source of truth. Nested sequences (itinerary, inclusions,
//! exclusions, faqs, content blocks) live in JSON text columns and are
//! decoded leniently on read, so a hand-edited database degrades to empty
//! sequences instead of failing requests.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use super::{seed, Store};
use crate::errors::AppError;
use crate::models::{
    CreatePackageRequest, Package, UpdateContentRequest, UpdatePackageRequest, WebsiteContent,
};

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run embedded migrations
    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Create tables if they don't exist
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS packages (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            price REAL NOT NULL,
            duration TEXT NOT NULL,
            location TEXT NOT NULL,
            image_url TEXT NOT NULL,
            people INTEGER,
            rating REAL,
            reviews INTEGER,
            itinerary TEXT NOT NULL DEFAULT '[]',
            inclusions TEXT NOT NULL DEFAULT '[]',
            exclusions TEXT NOT NULL DEFAULT '[]',
            faqs TEXT NOT NULL DEFAULT '[]',
            featured INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS content (
            page TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            blocks TEXT NOT NULL DEFAULT '[]',
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for common queries
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_packages_created_at ON packages(created_at);
        CREATE INDEX IF NOT EXISTS idx_packages_featured ON packages(featured);
        "#,
    )
    .execute(pool)
    .await?;

    seed_content(pool).await?;

    Ok(())
}

/// Insert the default pages unless they already exist, so the content
/// endpoints work against a brand-new database file. INSERT OR IGNORE keeps
/// operator edits intact across restarts.
async fn seed_content(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for document in seed::website_content() {
        let blocks_json = serde_json::to_string(&document.blocks).unwrap_or_default();
        sqlx::query(
            "INSERT OR IGNORE INTO content (page, title, description, blocks, updated_at) VALUES (?, ?, ?, ?, ?)"
        )
        .bind(&document.page)
        .bind(&document.title)
        .bind(&document.description)
        .bind(&blocks_json)
        .bind(&document.updated_at)
        .execute(pool)
        .await?;
    }
    Ok(())
}

/// Store backend over a SQLite connection pool.
///
/// Packages are never seeded here; a fresh database starts with an empty
/// catalog and only the default content pages.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for SqliteStore {
    // ==================== PACKAGE OPERATIONS ====================

    async fn list_packages(&self) -> Result<Vec<Package>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, description, price, duration, location, image_url, people, rating, reviews, itinerary, inclusions, exclusions, faqs, featured, created_at, updated_at FROM packages ORDER BY created_at"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| package_from_row(&row)).collect())
    }

    async fn get_package(&self, id: &str) -> Result<Option<Package>, AppError> {
        let row = sqlx::query(
            "SELECT id, title, description, price, duration, location, image_url, people, rating, reviews, itinerary, inclusions, exclusions, faqs, featured, created_at, updated_at FROM packages WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(package_from_row))
    }

    async fn create_package(&self, request: &CreatePackageRequest) -> Result<Package, AppError> {
        request.validate()?;

        let package =
            request.to_package(uuid::Uuid::new_v4().to_string(), Utc::now().to_rfc3339());
        let itinerary_json = serde_json::to_string(&package.itinerary)?;
        let inclusions_json = serde_json::to_string(&package.inclusions)?;
        let exclusions_json = serde_json::to_string(&package.exclusions)?;
        let faqs_json = serde_json::to_string(&package.faqs)?;

        sqlx::query(
            r#"INSERT INTO packages (
                id, title, description, price, duration, location, image_url,
                people, rating, reviews, itinerary, inclusions, exclusions, faqs,
                featured, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&package.id)
        .bind(&package.title)
        .bind(&package.description)
        .bind(package.price)
        .bind(&package.duration)
        .bind(&package.location)
        .bind(&package.image_url)
        .bind(package.people.map(|v| v as i64))
        .bind(package.rating)
        .bind(package.reviews.map(|v| v as i64))
        .bind(&itinerary_json)
        .bind(&inclusions_json)
        .bind(&exclusions_json)
        .bind(&faqs_json)
        .bind(package.featured as i32)
        .bind(&package.created_at)
        .bind(&package.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(package)
    }

    async fn update_package(
        &self,
        id: &str,
        request: &UpdatePackageRequest,
    ) -> Result<Package, AppError> {
        let existing = self
            .get_package(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Package not found".to_string()))?;

        let mut merged = request.merge_onto(&existing);
        merged.updated_at = Utc::now().to_rfc3339();
        merged.validate()?;

        let itinerary_json = serde_json::to_string(&merged.itinerary)?;
        let inclusions_json = serde_json::to_string(&merged.inclusions)?;
        let exclusions_json = serde_json::to_string(&merged.exclusions)?;
        let faqs_json = serde_json::to_string(&merged.faqs)?;

        sqlx::query(
            r#"UPDATE packages SET
                title = ?, description = ?, price = ?, duration = ?, location = ?,
                image_url = ?, people = ?, rating = ?, reviews = ?, itinerary = ?,
                inclusions = ?, exclusions = ?, faqs = ?, featured = ?, updated_at = ?
            WHERE id = ?"#,
        )
        .bind(&merged.title)
        .bind(&merged.description)
        .bind(merged.price)
        .bind(&merged.duration)
        .bind(&merged.location)
        .bind(&merged.image_url)
        .bind(merged.people.map(|v| v as i64))
        .bind(merged.rating)
        .bind(merged.reviews.map(|v| v as i64))
        .bind(&itinerary_json)
        .bind(&inclusions_json)
        .bind(&exclusions_json)
        .bind(&faqs_json)
        .bind(merged.featured as i32)
        .bind(&merged.updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(merged)
    }

    async fn delete_package(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM packages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ==================== CONTENT OPERATIONS ====================

    async fn list_pages(&self) -> Result<Vec<String>, AppError> {
        let rows = sqlx::query("SELECT page FROM content ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|row| row.get("page")).collect())
    }

    async fn get_content(&self, page: &str) -> Result<Option<WebsiteContent>, AppError> {
        let row = sqlx::query(
            "SELECT page, title, description, blocks, updated_at FROM content WHERE page = ?",
        )
        .bind(page)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(content_from_row))
    }

    async fn update_content(
        &self,
        page: &str,
        request: &UpdateContentRequest,
    ) -> Result<WebsiteContent, AppError> {
        let existing = self
            .get_content(page)
            .await?
            .ok_or_else(|| AppError::NotFound("Content not found".to_string()))?;

        let mut merged = request.merge_onto(&existing);
        merged.updated_at = Utc::now().to_rfc3339();

        let blocks_json = serde_json::to_string(&merged.blocks)?;

        sqlx::query(
            "UPDATE content SET title = ?, description = ?, blocks = ?, updated_at = ? WHERE page = ?"
        )
        .bind(&merged.title)
        .bind(&merged.description)
        .bind(&blocks_json)
        .bind(&merged.updated_at)
        .bind(page)
        .execute(&self.pool)
        .await?;

        Ok(merged)
    }
}

// Helper functions for row conversion

fn package_from_row(row: &sqlx::sqlite::SqliteRow) -> Package {
    let featured: i32 = row.get("featured");
    let people: Option<i64> = row.get("people");
    let reviews: Option<i64> = row.get("reviews");
    let itinerary_str: String = row.get("itinerary");
    let inclusions_str: String = row.get("inclusions");
    let exclusions_str: String = row.get("exclusions");
    let faqs_str: String = row.get("faqs");

    Package {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        price: row.get("price"),
        duration: row.get("duration"),
        location: row.get("location"),
        image_url: row.get("image_url"),
        people: people.map(|v| v as u32),
        rating: row.get("rating"),
        reviews: reviews.map(|v| v as u32),
        itinerary: parse_json_column(&itinerary_str),
        inclusions: parse_json_column(&inclusions_str),
        exclusions: parse_json_column(&exclusions_str),
        faqs: parse_json_column(&faqs_str),
        featured: featured != 0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn content_from_row(row: &sqlx::sqlite::SqliteRow) -> WebsiteContent {
    let blocks_str: String = row.get("blocks");

    WebsiteContent {
        page: row.get("page"),
        title: row.get("title"),
        description: row.get("description"),
        blocks: parse_json_column(&blocks_str),
        updated_at: row.get("updated_at"),
    }
}

fn parse_json_column<T>(s: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    serde_json::from_str(s).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Faq, ItineraryDay};
    use tempfile::TempDir;

    fn request(title: &str) -> CreatePackageRequest {
        CreatePackageRequest {
            title: title.to_string(),
            description: "A test package".to_string(),
            price: Some(499.0),
            duration: "5 days".to_string(),
            location: "Testland".to_string(),
            image_url: "http://example.com/test.jpg".to_string(),
            people: Some(8),
            rating: Some(4.5),
            reviews: None,
            itinerary: vec![ItineraryDay {
                day: 1,
                title: "Arrival".to_string(),
                description: "Check in".to_string(),
                activities: vec!["Transfer".to_string()],
            }],
            inclusions: vec!["Hotel".to_string()],
            exclusions: vec!["Flights".to_string()],
            faqs: vec![Faq {
                question: "Visa?".to_string(),
                answer: "On arrival".to_string(),
            }],
            featured: true,
        }
    }

    #[tokio::test]
    async fn test_fresh_database_seeds_content_but_not_packages() {
        let dir = TempDir::new().unwrap();
        let pool = init_database(&dir.path().join("travel.sqlite")).await.unwrap();
        let store = SqliteStore::new(pool);

        assert_eq!(store.list_pages().await.unwrap(), vec!["home", "about"]);
        assert!(store.list_packages().await.unwrap().is_empty());

        let home = store.get_content("home").await.unwrap().unwrap();
        assert!(!home.blocks.is_empty());
    }

    #[tokio::test]
    async fn test_nested_fields_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("travel.sqlite");

        let store = SqliteStore::new(init_database(&path).await.unwrap());
        let created = store.create_package(&request("Roundtrip")).await.unwrap();

        let reopened = SqliteStore::new(init_database(&path).await.unwrap());
        let fetched = reopened.get_package(&created.id).await.unwrap().unwrap();

        assert_eq!(fetched.title, "Roundtrip");
        assert_eq!(fetched.itinerary.len(), 1);
        assert_eq!(fetched.itinerary[0].activities, vec!["Transfer"]);
        assert_eq!(fetched.faqs[0].question, "Visa?");
        assert_eq!(fetched.people, Some(8));
        assert!(fetched.featured);
    }

    #[tokio::test]
    async fn test_migrations_keep_edited_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("travel.sqlite");

        let store = SqliteStore::new(init_database(&path).await.unwrap());
        let patch = UpdateContentRequest {
            title: Some("Edited Home".to_string()),
            ..Default::default()
        };
        store.update_content("home", &patch).await.unwrap();

        // A restart re-runs migrations; the seed must not clobber the edit.
        let reopened = SqliteStore::new(init_database(&path).await.unwrap());
        let home = reopened.get_content("home").await.unwrap().unwrap();
        assert_eq!(home.title, "Edited Home");
    }

    #[tokio::test]
    async fn test_malformed_json_column_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let pool = init_database(&dir.path().join("travel.sqlite")).await.unwrap();
        let store = SqliteStore::new(pool.clone());

        let created = store.create_package(&request("Broken")).await.unwrap();
        sqlx::query("UPDATE packages SET itinerary = 'not json' WHERE id = ?")
            .bind(&created.id)
            .execute(&pool)
            .await
            .unwrap();

        let fetched = store.get_package(&created.id).await.unwrap().unwrap();
        assert!(fetched.itinerary.is_empty());
        assert_eq!(fetched.inclusions, vec!["Hotel"]);
    }
}
