//! SQLite catalogue backend (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use beer_core::{Beer, BeerId, CatalogError, CatalogStorage, NewBeer, NewReview, Review, ReviewId};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub async fn open(database_path: &Path) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path.display());

        // Create parent directory if needed
        if let Some(parent) = database_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to SQLite database at: {}",
                    database_path.display()
                )
            })?;

        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // AUTOINCREMENT keeps ids from ever being reused
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS beers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                brewery TEXT NOT NULL,
                abv REAL NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        // beer_id is deliberately not a foreign key: parents are unchecked
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reviews (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                beer_id INTEGER NOT NULL,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                score INTEGER NOT NULL,
                text TEXT NOT NULL DEFAULT '',
                created DATETIME NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_reviews_beer_id ON reviews (beer_id)
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl CatalogStorage for SqliteStorage {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn add_beer(&self, beer: NewBeer) -> beer_core::Result<Beer> {
        let row: BeerRow = sqlx::query_as(
            r#"
            INSERT INTO beers (name, brewery, abv)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, brewery, abv
            "#,
        )
        .bind(&beer.name)
        .bind(&beer.brewery)
        .bind(f64::from(beer.abv))
        .fetch_one(&self.pool)
        .await
        .map_err(unavailable)?;

        tracing::debug!("Stored beer {} ({})", row.id, row.name);
        Ok(row.into())
    }

    async fn list_beers(&self) -> beer_core::Result<Vec<Beer>> {
        let rows: Vec<BeerRow> = sqlx::query_as(
            r#"
            SELECT id, name, brewery, abv FROM beers ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get_beer(&self, id: BeerId) -> beer_core::Result<Option<Beer>> {
        let Some(id) = to_sql_id(id) else {
            return Ok(None);
        };

        let row: Option<BeerRow> = sqlx::query_as(
            r#"
            SELECT id, name, brewery, abv FROM beers WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(row.map(|r| r.into()))
    }

    async fn add_review(&self, beer_id: BeerId, review: NewReview) -> beer_core::Result<Review> {
        let sql_beer_id = to_sql_id(beer_id).ok_or(CatalogError::BeerNotFound(beer_id))?;

        let row: ReviewRow = sqlx::query_as(
            r#"
            INSERT INTO reviews (beer_id, first_name, last_name, score, text, created)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, beer_id, first_name, last_name, score, text, created
            "#,
        )
        .bind(sql_beer_id)
        .bind(&review.first_name)
        .bind(&review.last_name)
        .bind(review.score)
        .bind(&review.text)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(unavailable)?;

        tracing::debug!("Stored review {} for beer {}", row.id, beer_id);
        Ok(row.into())
    }

    async fn list_reviews_for_beer(&self, beer_id: BeerId) -> beer_core::Result<Vec<Review>> {
        let Some(beer_id) = to_sql_id(beer_id) else {
            return Ok(Vec::new());
        };

        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
            SELECT id, beer_id, first_name, last_name, score, text, created
            FROM reviews WHERE beer_id = ?1
            ORDER BY id
            "#,
        )
        .bind(beer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}

fn unavailable(e: sqlx::Error) -> CatalogError {
    CatalogError::BackendUnavailable(e.to_string())
}

/// SQLite integers are signed; ids beyond that range were never issued
fn to_sql_id(id: BeerId) -> Option<i64> {
    i64::try_from(id).ok()
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct BeerRow {
    id: i64,
    name: String,
    brewery: String,
    abv: f64,
}

impl From<BeerRow> for Beer {
    fn from(r: BeerRow) -> Self {
        Beer {
            id: r.id as BeerId,
            name: r.name,
            brewery: r.brewery,
            abv: r.abv as f32,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    beer_id: i64,
    first_name: String,
    last_name: String,
    score: i32,
    text: String,
    created: chrono::DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(r: ReviewRow) -> Self {
        Review {
            id: r.id as ReviewId,
            beer_id: r.beer_id as BeerId,
            first_name: r.first_name,
            last_name: r.last_name,
            score: r.score,
            text: r.text,
            created: r.created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beer_core::conformance;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tokio_test::assert_ok;

    async fn open_temp() -> (TempDir, SqliteStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = assert_ok!(SqliteStorage::open(&dir.path().join("beers.db")).await);
        (dir, storage)
    }

    #[tokio::test]
    async fn test_conformance_round_trip() {
        let (_dir, storage) = open_temp().await;
        conformance::round_trip(&storage).await;
    }

    #[tokio::test]
    async fn test_conformance_listing() {
        let (_dir, storage) = open_temp().await;
        conformance::listing_is_complete_and_ordered(&storage).await;
    }

    #[tokio::test]
    async fn test_conformance_relations() {
        let (_dir, storage) = open_temp().await;
        conformance::reviews_follow_their_parent(&storage).await;
    }

    #[tokio::test]
    async fn test_conformance_not_found() {
        let (_dir, storage) = open_temp().await;
        conformance::unknown_beer_is_not_found(&storage).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_conformance_concurrent_inserts() {
        let (_dir, storage) = open_temp().await;
        conformance::concurrent_inserts_get_unique_ids(Arc::new(storage), 40).await;
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beers.db");

        let lager = {
            let storage = SqliteStorage::open(&path).await.unwrap();
            let lager = storage
                .add_beer(NewBeer::new("Lager", "Acme", 4.5))
                .await
                .unwrap();
            storage
                .add_review(lager.id, NewReview::new("Ada", "L", 5, "Crisp"))
                .await
                .unwrap();
            storage.pool.close().await;
            lager
        };

        let storage = SqliteStorage::open(&path).await.unwrap();
        assert_eq!(storage.list_beers().await.unwrap(), vec![lager.clone()]);
        assert_eq!(storage.list_reviews_for_beer(lager.id).await.unwrap().len(), 1);

        // Identifiers continue after the last issued one
        let stout = storage
            .add_beer(NewBeer::new("Stout", "Acme", 6.0))
            .await
            .unwrap();
        assert_eq!(stout.id, lager.id + 1);
    }

    #[tokio::test]
    async fn test_closed_pool_is_backend_unavailable() {
        let (_dir, storage) = open_temp().await;
        storage.pool.close().await;

        let err = storage.list_beers().await.unwrap_err();
        assert!(matches!(err, CatalogError::BackendUnavailable(_)));

        let err = storage
            .add_beer(NewBeer::new("Lager", "Acme", 4.5))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::BackendUnavailable(_)));
    }

    #[tokio::test]
    async fn test_out_of_range_ids() {
        let (_dir, storage) = open_temp().await;

        assert_eq!(storage.get_beer(u64::MAX).await.unwrap(), None);
        assert!(storage.list_reviews_for_beer(u64::MAX).await.unwrap().is_empty());
    }
}
