//! Beer types

use crate::BeerId;
use serde::{Deserialize, Serialize};

/// A beer held in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub id: BeerId,
    pub name: String,
    pub brewery: String,
    /// Alcohol by volume
    pub abv: f32,
}

impl Beer {
    /// Attach an allocated identifier to a new beer
    pub fn from_new(id: BeerId, beer: NewBeer) -> Self {
        Self {
            id,
            name: beer.name,
            brewery: beer.brewery,
            abv: beer.abv,
        }
    }
}

/// Beer creation request, before an identifier has been assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBeer {
    pub name: String,
    pub brewery: String,
    pub abv: f32,
}

impl NewBeer {
    pub fn new(name: impl Into<String>, brewery: impl Into<String>, abv: f32) -> Self {
        Self {
            name: name.into(),
            brewery: brewery.into(),
            abv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_keeps_fields() {
        let beer = Beer::from_new(7, NewBeer::new("Lager", "Acme", 4.5));
        assert_eq!(beer.id, 7);
        assert_eq!(beer.name, "Lager");
        assert_eq!(beer.brewery, "Acme");
        assert_eq!(beer.abv, 4.5);
    }

    #[test]
    fn test_equality_includes_id() {
        let a = Beer::from_new(1, NewBeer::new("Lager", "Acme", 4.5));
        let b = Beer::from_new(2, NewBeer::new("Lager", "Acme", 4.5));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_new_beer_ignores_client_id() {
        // Unknown fields are ignored, so a client-supplied id never reaches storage
        let json = r#"{"id": 99, "name": "Stout", "brewery": "Acme", "abv": 6.0}"#;
        let beer: NewBeer = serde_json::from_str(json).unwrap();
        assert_eq!(beer, NewBeer::new("Stout", "Acme", 6.0));
    }
}
