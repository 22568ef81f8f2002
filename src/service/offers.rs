//! Queries on the `offer` table.

use crate::error::AppError;
use crate::models::{Offer, OfferInput};
use crate::store::{quote, OFFER_TABLE};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, order_id, executor_id";

pub struct OfferService;

impl OfferService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Offer>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, quote(OFFER_TABLE));
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Offer>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Offer>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = ?", COLUMNS, quote(OFFER_TABLE));
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Offer>(&sql).bind(id).fetch_optional(pool).await?;
        Ok(row)
    }

    pub async fn create(pool: &SqlitePool, input: &OfferInput) -> Result<Offer, AppError> {
        let sql = format!(
            "INSERT INTO {} (order_id, executor_id) VALUES (?, ?) RETURNING {}",
            quote(OFFER_TABLE),
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Offer>(&sql)
            .bind(input.order_id)
            .bind(input.executor_id)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    pub async fn update(pool: &SqlitePool, id: i64, input: &OfferInput) -> Result<Option<Offer>, AppError> {
        let sql = format!(
            "UPDATE {} SET order_id = ?, executor_id = ? WHERE id = ? RETURNING {}",
            quote(OFFER_TABLE),
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Offer>(&sql)
            .bind(input.order_id)
            .bind(input.executor_id)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Offer>, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = ? RETURNING {}", quote(OFFER_TABLE), COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Offer>(&sql).bind(id).fetch_optional(pool).await?;
        Ok(row)
    }
}
