//! /users and /users/:id

use super::parse_id;
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::{User, UserInput};
use crate::response::{MODIFIED, WRITTEN};
use crate::service::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let rows = UserService::list(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UserInput>,
) -> Result<StatusCode, AppError> {
    let user = UserService::create(&state.pool, &input).await?;
    tracing::info!(id = user.id, "user created");
    Ok(WRITTEN)
}

pub async fn read(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<Json<User>, AppError> {
    let id = parse_id(&id_str)?;
    let user = UserService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    Ok(Json(user))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(input): JsonBody<UserInput>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    UserService::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    Ok(MODIFIED)
}

pub async fn delete(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    UserService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    tracing::info!(id, "user deleted");
    Ok(MODIFIED)
}
