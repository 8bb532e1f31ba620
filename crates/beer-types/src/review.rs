//! Review types

use crate::{BeerId, ReviewId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A review attached to exactly one beer
///
/// The body fields are opaque to storage and never validated there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub beer_id: BeerId,
    pub first_name: String,
    pub last_name: String,
    pub score: i32,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl Review {
    /// Attach identity, parent and creation time to a new review
    pub fn from_new(id: ReviewId, beer_id: BeerId, review: NewReview, created: DateTime<Utc>) -> Self {
        Self {
            id,
            beer_id,
            first_name: review.first_name,
            last_name: review.last_name,
            score: review.score,
            text: review.text,
            created,
        }
    }
}

/// Review creation request. The parent beer is supplied separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub first_name: String,
    pub last_name: String,
    pub score: i32,
    #[serde(default)]
    pub text: String,
}

impl NewReview {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        score: i32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            score,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_sets_parent() {
        let now = Utc::now();
        let review = Review::from_new(3, 1, NewReview::new("Ada", "L", 5, "Crisp"), now);
        assert_eq!(review.id, 3);
        assert_eq!(review.beer_id, 1);
        assert_eq!(review.score, 5);
        assert_eq!(review.created, now);
    }

    #[test]
    fn test_text_defaults_to_empty() {
        let json = r#"{"first_name": "Ada", "last_name": "L", "score": 4}"#;
        let review: NewReview = serde_json::from_str(json).unwrap();
        assert!(review.text.is_empty());
    }
}
