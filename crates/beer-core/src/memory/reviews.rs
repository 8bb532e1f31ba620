//! In-memory review store

use super::IdAllocator;
use beer_types::{BeerId, NewReview, Review, ReviewId};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Reviews keyed by identifier and indexed by parent beer
///
/// The parent beer is taken on trust; nothing here checks that it exists.
pub struct ReviewStore {
    ids: IdAllocator,
    table: RwLock<ReviewTable>,
}

#[derive(Default)]
struct ReviewTable {
    rows: Vec<Review>,
    by_id: HashMap<ReviewId, usize>,
    by_beer: HashMap<BeerId, Vec<usize>>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::with_allocator(IdAllocator::new())
    }

    pub fn with_allocator(ids: IdAllocator) -> Self {
        Self {
            ids,
            table: RwLock::new(ReviewTable::default()),
        }
    }

    /// Assign an identifier, stamp the creation time and store the review
    pub async fn insert(&self, beer_id: BeerId, review: NewReview) -> Review {
        let mut table = self.table.write().await;
        let review = Review::from_new(self.ids.next(), beer_id, review, Utc::now());

        let position = table.rows.len();
        table.by_id.insert(review.id, position);
        table.by_beer.entry(beer_id).or_default().push(position);
        table.rows.push(review.clone());

        debug!("Stored review {} for beer {}", review.id, beer_id);
        review
    }

    /// Reviews of one beer in insertion order
    pub async fn list_by_beer(&self, beer_id: BeerId) -> Vec<Review> {
        let table = self.table.read().await;
        table
            .by_beer
            .get(&beer_id)
            .map(|positions| {
                positions
                    .iter()
                    .filter_map(|&position| table.rows.get(position))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub async fn get(&self, id: ReviewId) -> Option<Review> {
        let table = self.table.read().await;
        table
            .by_id
            .get(&id)
            .and_then(|&position| table.rows.get(position))
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for ReviewStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(score: i32) -> NewReview {
        NewReview::new("Ada", "Lovelace", score, "Tasty")
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = ReviewStore::new();

        let stored = store.insert(1, review(4)).await;
        assert_eq!(stored.id, 1);
        assert_eq!(stored.beer_id, 1);
        assert_eq!(store.get(stored.id).await, Some(stored));
        assert_eq!(store.get(2).await, None);
    }

    #[tokio::test]
    async fn test_list_by_beer_filters_parent() {
        let store = ReviewStore::new();

        let first = store.insert(1, review(3)).await;
        let other = store.insert(2, review(5)).await;
        let second = store.insert(1, review(4)).await;

        assert_eq!(store.list_by_beer(1).await, vec![first, second]);
        assert_eq!(store.list_by_beer(2).await, vec![other]);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_unknown_parent() {
        let store = ReviewStore::new();
        assert!(store.list_by_beer(7).await.is_empty());

        // Orphans are accepted as-is
        let orphan = store.insert(7, review(1)).await;
        assert_eq!(store.list_by_beer(7).await, vec![orphan]);
    }
}
