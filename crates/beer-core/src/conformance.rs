//! Property checks shared by every `CatalogStorage` backend
//!
//! Each check expects a freshly created, empty backend and panics on the
//! first violated property.

use crate::CatalogStorage;
use beer_types::{NewBeer, NewReview};
use std::collections::HashSet;
use std::sync::Arc;

/// A stored beer reads back equal in every field
pub async fn round_trip(storage: &dyn CatalogStorage) {
    let added = storage
        .add_beer(NewBeer::new("Lager", "Acme", 4.5))
        .await
        .expect("add_beer failed");

    assert!(added.id > 0);
    assert_eq!(added.name, "Lager");
    assert_eq!(added.brewery, "Acme");
    assert_eq!(added.abv, 4.5);

    let fetched = storage
        .get_beer(added.id)
        .await
        .expect("get_beer failed");
    assert_eq!(fetched, Some(added));
}

/// `list_beers` returns exactly what was added, in insertion order
pub async fn listing_is_complete_and_ordered(storage: &dyn CatalogStorage) {
    assert!(storage.list_beers().await.expect("list_beers failed").is_empty());

    let mut added = Vec::new();
    for (i, name) in ["Pils", "Bock", "Saison", "Porter", "Gose"].iter().enumerate() {
        let beer = storage
            .add_beer(NewBeer::new(*name, "Acme", 4.0 + i as f32))
            .await
            .expect("add_beer failed");
        added.push(beer);
    }

    let listed = storage.list_beers().await.expect("list_beers failed");
    assert_eq!(listed, added);
}

/// A review is listed under its parent and nowhere else
pub async fn reviews_follow_their_parent(storage: &dyn CatalogStorage) {
    let lager = storage
        .add_beer(NewBeer::new("Lager", "Acme", 4.5))
        .await
        .expect("add_beer failed");
    let stout = storage
        .add_beer(NewBeer::new("Stout", "Acme", 6.0))
        .await
        .expect("add_beer failed");

    assert!(storage
        .list_reviews_for_beer(lager.id)
        .await
        .expect("list_reviews_for_beer failed")
        .is_empty());

    let first = storage
        .add_review(lager.id, NewReview::new("Ada", "Lovelace", 4, "Crisp"))
        .await
        .expect("add_review failed");
    let other = storage
        .add_review(stout.id, NewReview::new("Alan", "Turing", 5, "Rich"))
        .await
        .expect("add_review failed");
    let second = storage
        .add_review(lager.id, NewReview::new("Grace", "Hopper", 3, "Thin"))
        .await
        .expect("add_review failed");

    assert_eq!(first.beer_id, lager.id);
    assert_eq!(first.first_name, "Ada");
    assert_eq!(first.score, 4);
    assert_ne!(first.id, second.id);

    let lager_reviews = storage
        .list_reviews_for_beer(lager.id)
        .await
        .expect("list_reviews_for_beer failed");
    assert_eq!(lager_reviews, vec![first, second]);

    let stout_reviews = storage
        .list_reviews_for_beer(stout.id)
        .await
        .expect("list_reviews_for_beer failed");
    assert_eq!(stout_reviews, vec![other]);

    let unrelated = storage
        .list_reviews_for_beer(stout.id + 1000)
        .await
        .expect("list_reviews_for_beer failed");
    assert!(unrelated.is_empty());
}

/// Identifiers never issued come back as `None`, not as a default record
pub async fn unknown_beer_is_not_found(storage: &dyn CatalogStorage) {
    assert_eq!(storage.get_beer(1).await.expect("get_beer failed"), None);

    let beer = storage
        .add_beer(NewBeer::new("Lager", "Acme", 4.5))
        .await
        .expect("add_beer failed");

    assert_eq!(storage.get_beer(beer.id + 1).await.expect("get_beer failed"), None);
    assert_eq!(storage.get_beer(0).await.expect("get_beer failed"), None);

    let err = storage
        .require_beer(beer.id + 1)
        .await
        .expect_err("require_beer should fail");
    assert!(err.is_not_found());
}

/// Concurrent writers all get distinct identifiers and no record is lost
///
/// Readers run alongside the writers and must only ever observe whole records.
pub async fn concurrent_inserts_get_unique_ids(storage: Arc<dyn CatalogStorage>, writers: usize) {
    let parent = storage
        .add_beer(NewBeer::new("Parent", "Acme", 5.0))
        .await
        .expect("add_beer failed");
    let parent_id = parent.id;

    let mut handles = Vec::with_capacity(writers);
    for i in 0..writers {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            let beer = storage
                .add_beer(NewBeer::new(format!("Beer {}", i), format!("Brewery {}", i), 5.0))
                .await
                .expect("add_beer failed");
            let review = storage
                .add_review(parent_id, NewReview::new(format!("Reviewer {}", i), "X", 3, "ok"))
                .await
                .expect("add_review failed");
            (beer.id, review.id)
        }));
    }

    let mut readers = Vec::new();
    for _ in 0..4 {
        let storage = storage.clone();
        readers.push(tokio::spawn(async move {
            for _ in 0..20 {
                for beer in storage.list_beers().await.expect("list_beers failed") {
                    if let Some(suffix) = beer.name.strip_prefix("Beer ") {
                        assert_eq!(beer.brewery, format!("Brewery {}", suffix));
                    }
                }
                tokio::task::yield_now().await;
            }
        }));
    }

    let mut beer_ids = HashSet::new();
    let mut review_ids = HashSet::new();
    for handle in handles {
        let (beer_id, review_id) = handle.await.expect("writer task panicked");
        assert!(beer_ids.insert(beer_id), "duplicate beer id {}", beer_id);
        assert!(review_ids.insert(review_id), "duplicate review id {}", review_id);
    }
    for reader in readers {
        reader.await.expect("reader task panicked");
    }

    assert!(!beer_ids.contains(&parent_id));
    assert_eq!(beer_ids.len(), writers);
    assert_eq!(review_ids.len(), writers);

    let listed = storage.list_beers().await.expect("list_beers failed");
    assert_eq!(listed.len(), writers + 1);

    let reviews = storage
        .list_reviews_for_beer(parent_id)
        .await
        .expect("list_reviews_for_beer failed");
    assert_eq!(reviews.len(), writers);
}
