//! Queries on the `user` table.

use crate::error::AppError;
use crate::models::{User, UserInput};
use crate::store::{quote, USER_TABLE};
use sqlx::SqlitePool;
use std::collections::HashMap;

const COLUMNS: &str = "id, first_name, last_name, age, email, role, phone";

/// Ids bound per `IN (...)` lookup.
pub const ID_CHUNK: usize = 500;

pub struct UserService;

impl UserService {
    /// Every user, ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, quote(USER_TABLE));
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, User>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = ?", COLUMNS, quote(USER_TABLE));
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, User>(&sql).bind(id).fetch_optional(pool).await?;
        Ok(row)
    }

    /// First names keyed by id for the given ids. Ids with no row are absent from the map.
    /// Looked up `ID_CHUNK` ids per statement, below SQLite's bound-parameter limit.
    pub async fn first_names(pool: &SqlitePool, ids: &[i64]) -> Result<HashMap<i64, String>, AppError> {
        let mut names = HashMap::with_capacity(ids.len());
        for chunk in ids.chunks(ID_CHUNK) {
            let placeholders = vec!["?"; chunk.len()].join(", ");
            let sql = format!(
                "SELECT id, first_name FROM {} WHERE id IN ({})",
                quote(USER_TABLE),
                placeholders
            );
            tracing::debug!(ids = chunk.len(), "query user names");
            let mut query = sqlx::query_as::<_, (i64, Option<String>)>(&sql);
            for id in chunk {
                query = query.bind(*id);
            }
            let rows = query.fetch_all(pool).await?;
            names.extend(rows.into_iter().map(|(id, name)| (id, name.unwrap_or_default())));
        }
        Ok(names)
    }

    /// Insert with a store-assigned id. Returns the created row.
    pub async fn create(pool: &SqlitePool, input: &UserInput) -> Result<User, AppError> {
        let sql = format!(
            "INSERT INTO {} (first_name, last_name, age, email, role, phone) VALUES (?, ?, ?, ?, ?, ?) RETURNING {}",
            quote(USER_TABLE),
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.age)
            .bind(&input.email)
            .bind(&input.role)
            .bind(&input.phone)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Overwrite all six fields. `None` when no row has `id`.
    pub async fn update(pool: &SqlitePool, id: i64, input: &UserInput) -> Result<Option<User>, AppError> {
        let sql = format!(
            "UPDATE {} SET first_name = ?, last_name = ?, age = ?, email = ?, role = ?, phone = ? \
             WHERE id = ? RETURNING {}",
            quote(USER_TABLE),
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.age)
            .bind(&input.email)
            .bind(&input.role)
            .bind(&input.phone)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Delete by id. Returns the deleted row or `None`.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = ? RETURNING {}", quote(USER_TABLE), COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, User>(&sql).bind(id).fetch_optional(pool).await?;
        Ok(row)
    }
}
