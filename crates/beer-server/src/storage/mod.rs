//! Storage layer
//!
//! Picks the catalogue backend at startup. The in-memory backend lives in
//! `beer-core`; the durable one uses embedded SQLite.

pub mod db;

pub use db::SqliteStorage;

use anyhow::{Context, Result};
use beer_core::{CatalogError, CatalogStorage, MemoryStorage};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// Available storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    Memory,
    Sqlite,
}

impl FromStr for StorageType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageType::Memory),
            "sqlite" => Ok(StorageType::Sqlite),
            other => Err(CatalogError::Config(format!(
                "unknown storage type '{}', expected 'memory' or 'sqlite'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageType::Memory => write!(f, "memory"),
            StorageType::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Build the configured backend
pub async fn open_storage(
    storage_type: StorageType,
    database_path: &Path,
) -> Result<Arc<dyn CatalogStorage>> {
    info!("Initializing {} storage...", storage_type);

    let storage: Arc<dyn CatalogStorage> = match storage_type {
        StorageType::Memory => Arc::new(MemoryStorage::new()),
        StorageType::Sqlite => Arc::new(
            SqliteStorage::open(database_path)
                .await
                .context("Failed to initialize SQLite storage")?,
        ),
    };

    Ok(storage)
}
