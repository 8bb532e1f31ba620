//! Error types for the beer catalogue

use beer_types::BeerId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The requested beer identifier was never issued
    #[error("Beer not found: {0}")]
    BeerNotFound(BeerId),

    /// A durable backend could not be reached or failed a query
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::BeerNotFound(_))
    }
}
