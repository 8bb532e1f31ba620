//! In-memory beer store

use super::IdAllocator;
use beer_types::{Beer, BeerId, NewBeer};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Beers keyed by identifier, enumerated in insertion order
pub struct BeerStore {
    ids: IdAllocator,
    table: RwLock<BeerTable>,
}

#[derive(Default)]
struct BeerTable {
    rows: Vec<Beer>,
    /// id -> position in `rows`
    index: HashMap<BeerId, usize>,
}

impl BeerStore {
    pub fn new() -> Self {
        Self::with_allocator(IdAllocator::new())
    }

    pub fn with_allocator(ids: IdAllocator) -> Self {
        Self {
            ids,
            table: RwLock::new(BeerTable::default()),
        }
    }

    /// Assign an identifier and store the beer
    pub async fn insert(&self, beer: NewBeer) -> Beer {
        // Allocate under the write lock so rows stay in id order
        let mut table = self.table.write().await;
        let beer = Beer::from_new(self.ids.next(), beer);

        let position = table.rows.len();
        table.index.insert(beer.id, position);
        table.rows.push(beer.clone());

        debug!("Stored beer {} ({})", beer.id, beer.name);
        beer
    }

    pub async fn list(&self) -> Vec<Beer> {
        self.table.read().await.rows.clone()
    }

    pub async fn get(&self, id: BeerId) -> Option<Beer> {
        let table = self.table.read().await;
        table
            .index
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

impl Default for BeerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_ids() {
        let store = BeerStore::new();

        let lager = store.insert(NewBeer::new("Lager", "Acme", 4.5)).await;
        let stout = store.insert(NewBeer::new("Stout", "Acme", 6.2)).await;

        assert_eq!(lager.id, 1);
        assert_eq!(stout.id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = BeerStore::new();
        assert!(store.list().await.is_empty());

        let names = ["Pils", "Bock", "Saison", "Porter"];
        for name in names {
            store.insert(NewBeer::new(name, "Acme", 5.0)).await;
        }

        let listed: Vec<_> = store.list().await.into_iter().map(|b| b.name).collect();
        assert_eq!(listed, names);
    }

    #[tokio::test]
    async fn test_get() {
        let store = BeerStore::new();
        let stored = store.insert(NewBeer::new("Lager", "Acme", 4.5)).await;

        assert_eq!(store.get(stored.id).await, Some(stored));
        assert_eq!(store.get(2).await, None);
        assert_eq!(store.get(0).await, None);
    }

    #[tokio::test]
    async fn test_resumed_allocator() {
        let store = BeerStore::with_allocator(IdAllocator::starting_at(100));
        let beer = store.insert(NewBeer::new("Lager", "Acme", 4.5)).await;

        assert_eq!(beer.id, 100);
        assert_eq!(store.get(100).await, Some(beer));
    }
}
