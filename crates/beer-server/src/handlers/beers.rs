//! Beer handlers

use super::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use beer_core::{Beer, BeerId, NewBeer};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Beer>>, ApiError> {
    let beers = state.storage.list_beers().await?;
    Ok(Json(beers))
}

pub async fn create(
    State(state): State<AppState>,
    Json(beer): Json<NewBeer>,
) -> Result<(StatusCode, Json<Beer>), ApiError> {
    let beer = state.storage.add_beer(beer).await?;
    tracing::info!("Added beer {} ({})", beer.id, beer.name);
    Ok((StatusCode::CREATED, Json(beer)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<BeerId>,
) -> Result<Json<Beer>, ApiError> {
    let beer = state.storage.require_beer(id).await?;
    Ok(Json(beer))
}
