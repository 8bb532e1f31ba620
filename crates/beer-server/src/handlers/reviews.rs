//! Review handlers

use super::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use beer_core::{BeerId, NewReview, Review};

pub async fn list(
    State(state): State<AppState>,
    Path(beer_id): Path<BeerId>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = state.storage.list_reviews_for_beer(beer_id).await?;
    Ok(Json(reviews))
}

pub async fn create(
    State(state): State<AppState>,
    Path(beer_id): Path<BeerId>,
    Json(review): Json<NewReview>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    // Storage accepts any parent, so the existence check happens here
    if state.storage.get_beer(beer_id).await?.is_none() {
        return Err(ApiError::not_found(format!(
            "Cannot review beer {}: it does not exist",
            beer_id
        )));
    }

    let review = state.storage.add_review(beer_id, review).await?;
    tracing::info!("Added review {} for beer {}", review.id, beer_id);
    Ok((StatusCode::CREATED, Json(review)))
}
