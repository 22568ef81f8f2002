//! Queries on the `order` table, including the list with user names resolved.

use crate::error::AppError;
use crate::models::{Order, OrderInput, OrderListItem, UserRef};
use crate::service::UserService;
use crate::store::{quote, ORDER_TABLE};
use sqlx::SqlitePool;
use std::collections::{BTreeSet, HashMap};

const COLUMNS: &str = "id, name, description, start_date, end_date, address, price, customer_id, executor_id";

pub struct OrderService;

impl OrderService {
    /// Every order, ordered by id, raw ids.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Order>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, quote(ORDER_TABLE));
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Order>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Every order with customer and executor replaced by the user's first name.
    /// Referenced users are loaded in batches; ids with no user stay numeric.
    pub async fn list_with_names(pool: &SqlitePool) -> Result<Vec<OrderListItem>, AppError> {
        let orders = Self::list(pool).await?;
        let ids: Vec<i64> = orders
            .iter()
            .flat_map(|o| [o.customer_id, o.executor_id])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let names = UserService::first_names(pool, &ids).await?;
        Ok(orders
            .into_iter()
            .map(|o| {
                let customer = resolve_user(&names, o.customer_id);
                let executor = resolve_user(&names, o.executor_id);
                OrderListItem::from_order(o, customer, executor)
            })
            .collect())
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Order>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = ?", COLUMNS, quote(ORDER_TABLE));
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Order>(&sql).bind(id).fetch_optional(pool).await?;
        Ok(row)
    }

    /// Insert with a store-assigned id. Dates are stored exactly as submitted.
    pub async fn create(pool: &SqlitePool, input: &OrderInput) -> Result<Order, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, description, start_date, end_date, address, price, customer_id, executor_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING {}",
            quote(ORDER_TABLE),
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Order>(&sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.start_date)
            .bind(&input.end_date)
            .bind(&input.address)
            .bind(input.price)
            .bind(input.customer_id)
            .bind(input.executor_id)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Overwrite every field except `start_date`, which keeps the value it was created with.
    pub async fn update(pool: &SqlitePool, id: i64, input: &OrderInput) -> Result<Option<Order>, AppError> {
        let sql = format!(
            "UPDATE {} SET name = ?, description = ?, end_date = ?, address = ?, price = ?, \
             customer_id = ?, executor_id = ? WHERE id = ? RETURNING {}",
            quote(ORDER_TABLE),
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Order>(&sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.end_date)
            .bind(&input.address)
            .bind(input.price)
            .bind(input.customer_id)
            .bind(input.executor_id)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Order>, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = ? RETURNING {}", quote(ORDER_TABLE), COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Order>(&sql).bind(id).fetch_optional(pool).await?;
        Ok(row)
    }
}

fn resolve_user(names: &HashMap<i64, String>, id: i64) -> UserRef {
    match names.get(&id) {
        Some(name) => UserRef::Name(name.clone()),
        None => UserRef::Id(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_user_keeps_the_id() {
        let names = HashMap::from([(1, "Hugo".to_string())]);
        assert_eq!(resolve_user(&names, 1), UserRef::Name("Hugo".into()));
        assert_eq!(resolve_user(&names, 2), UserRef::Id(2));
    }
}
