//! In-memory catalogue backend
//!
//! Holds everything in process memory. Nothing survives a restart, which is
//! fine for this backend: it is a complete implementation, not a stub.

mod allocator;
mod beers;
mod reviews;

pub use allocator::IdAllocator;
pub use beers::BeerStore;
pub use reviews::ReviewStore;

use crate::ports::CatalogStorage;
use crate::Result;
use async_trait::async_trait;
use beer_types::{Beer, BeerId, NewBeer, NewReview, Review};

/// Catalogue storage backed by two in-memory stores
///
/// Owns both stores and, through them, their identifier allocators.
#[derive(Default)]
pub struct MemoryStorage {
    beers: BeerStore,
    reviews: ReviewStore,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStorage for MemoryStorage {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn add_beer(&self, beer: NewBeer) -> Result<Beer> {
        Ok(self.beers.insert(beer).await)
    }

    async fn list_beers(&self) -> Result<Vec<Beer>> {
        Ok(self.beers.list().await)
    }

    async fn get_beer(&self, id: BeerId) -> Result<Option<Beer>> {
        Ok(self.beers.get(id).await)
    }

    async fn add_review(&self, beer_id: BeerId, review: NewReview) -> Result<Review> {
        Ok(self.reviews.insert(beer_id, review).await)
    }

    async fn list_reviews_for_beer(&self, beer_id: BeerId) -> Result<Vec<Review>> {
        Ok(self.reviews.list_by_beer(beer_id).await)
    }
}
