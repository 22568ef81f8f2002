//! /offers and /offers/:id

use super::parse_id;
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::{Offer, OfferInput};
use crate::response::{MODIFIED, WRITTEN};
use crate::service::OfferService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Offer>>, AppError> {
    let rows = OfferService::list(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<OfferInput>,
) -> Result<StatusCode, AppError> {
    let offer = OfferService::create(&state.pool, &input).await?;
    tracing::info!(id = offer.id, "offer created");
    Ok(WRITTEN)
}

pub async fn read(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<Json<Offer>, AppError> {
    let id = parse_id(&id_str)?;
    let offer = OfferService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("offer {}", id)))?;
    Ok(Json(offer))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(input): JsonBody<OfferInput>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    OfferService::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("offer {}", id)))?;
    Ok(MODIFIED)
}

/// Unlike the other deletes this answers 200.
pub async fn delete(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    OfferService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("offer {}", id)))?;
    tracing::info!(id, "offer deleted");
    Ok(WRITTEN)
}
