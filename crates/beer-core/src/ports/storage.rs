//! Storage trait for the catalogue

use crate::{CatalogError, Result};
use async_trait::async_trait;
use beer_types::{Beer, BeerId, NewBeer, NewReview, Review};

/// Catalogue storage
///
/// The single entry point request layers use to read and write beers and
/// their reviews. Backends are chosen at construction time and shared as
/// `Arc<dyn CatalogStorage>`.
#[async_trait]
pub trait CatalogStorage: Send + Sync {
    /// Short name of the backend, e.g. `memory` or `sqlite`
    fn backend_name(&self) -> &'static str;

    /// Store a new beer and return it with its assigned identifier
    async fn add_beer(&self, beer: NewBeer) -> Result<Beer>;

    /// All beers in insertion order
    async fn list_beers(&self) -> Result<Vec<Beer>>;

    /// `Ok(None)` when no beer has the given identifier
    async fn get_beer(&self, id: BeerId) -> Result<Option<Beer>>;

    /// Store a review under `beer_id`.
    ///
    /// The parent is not checked for existence; callers that need that
    /// guarantee should call [`CatalogStorage::require_beer`] first.
    async fn add_review(&self, beer_id: BeerId, review: NewReview) -> Result<Review>;

    /// Reviews of a beer in insertion order, empty if there are none
    async fn list_reviews_for_beer(&self, beer_id: BeerId) -> Result<Vec<Review>>;

    /// Like [`CatalogStorage::get_beer`] but absence is an error
    async fn require_beer(&self, id: BeerId) -> Result<Beer> {
        self.get_beer(id)
            .await?
            .ok_or(CatalogError::BeerNotFound(id))
    }
}
