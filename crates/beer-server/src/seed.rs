//! Sample catalogue data loaded at startup

use beer_core::{CatalogStorage, NewBeer, NewReview, Result};
use tracing::info;

fn sample_beers() -> Vec<NewBeer> {
    vec![
        NewBeer::new("Pliny the Elder", "Russian River Brewing Company", 8.0),
        NewBeer::new("Oatmeal Stout", "Samuel Smith", 5.0),
        NewBeer::new("Märzen", "Schlenkerla", 5.1),
        NewBeer::new("Duvel", "Duvel Moortgat", 8.5),
        NewBeer::new("Saison Dupont", "Brasserie Dupont", 6.5),
        NewBeer::new("Orval", "Brasserie d'Orval", 6.2),
    ]
}

fn sample_reviews() -> Vec<(usize, NewReview)> {
    vec![
        (0, NewReview::new("Joe", "Tribiani", 5, "Best west coast IPA there is.")),
        (0, NewReview::new("Chandler", "Bing", 4, "Could it BE any hoppier?")),
        (1, NewReview::new("Rachel", "Green", 4, "Smooth and silky.")),
        (2, NewReview::new("Ross", "Geller", 3, "Like drinking a campfire.")),
        (3, NewReview::new("Monica", "Geller", 5, "Dangerously easy to drink.")),
        (5, NewReview::new("Phoebe", "Buffay", 4, "Funky, in a good way.")),
    ]
}

/// Populate an empty catalogue with sample beers and reviews.
///
/// A catalogue that already holds beers is left untouched, so restarting
/// against a durable backend does not duplicate the samples.
pub async fn populate(storage: &dyn CatalogStorage) -> Result<usize> {
    if !storage.list_beers().await?.is_empty() {
        info!("Catalogue already populated, skipping sample data");
        return Ok(0);
    }

    let mut beer_ids = Vec::new();
    for beer in sample_beers() {
        beer_ids.push(storage.add_beer(beer).await?.id);
    }

    for (index, review) in sample_reviews() {
        storage.add_review(beer_ids[index], review).await?;
    }

    info!("Loaded {} sample beers", beer_ids.len());
    Ok(beer_ids.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use beer_core::MemoryStorage;

    #[tokio::test]
    async fn test_populate_empty_catalogue() {
        let storage = MemoryStorage::new();

        let added = populate(&storage).await.unwrap();
        assert_eq!(added, sample_beers().len());

        let beers = storage.list_beers().await.unwrap();
        assert_eq!(beers.len(), added);
        assert_eq!(beers[0].name, "Pliny the Elder");

        let reviews = storage.list_reviews_for_beer(beers[0].id).await.unwrap();
        assert_eq!(reviews.len(), 2);
        assert!(storage
            .list_reviews_for_beer(beers[4].id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_populate_is_skipped_when_not_empty() {
        let storage = MemoryStorage::new();
        storage
            .add_beer(NewBeer::new("House Lager", "Local", 4.2))
            .await
            .unwrap();

        assert_eq!(populate(&storage).await.unwrap(), 0);
        assert_eq!(storage.list_beers().await.unwrap().len(), 1);
    }
}
