//! /orders and /orders/:id
//!
//! The list resolves customer and executor to first names; the single-row read does not.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::{Order, OrderInput, OrderListItem};
use crate::response::{MODIFIED, WRITTEN};
use crate::service::OrderService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<OrderListItem>>, AppError> {
    let rows = OrderService::list_with_names(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<OrderInput>,
) -> Result<StatusCode, AppError> {
    let order = OrderService::create(&state.pool, &input).await?;
    tracing::info!(id = order.id, "order created");
    Ok(WRITTEN)
}

pub async fn read(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<Json<Order>, AppError> {
    let id = parse_id(&id_str)?;
    let order = OrderService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;
    Ok(Json(order))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(input): JsonBody<OrderInput>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    OrderService::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;
    Ok(MODIFIED)
}

pub async fn delete(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    OrderService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;
    tracing::info!(id, "order deleted");
    Ok(MODIFIED)
}
