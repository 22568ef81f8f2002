//! SQLite pool and table DDL for `user`, `order` and `offer`.
//!
//! Foreign keys are declared for documentation only; the pragma is switched off so
//! rows may reference ids that do not exist (offers are seeded before orders).

use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

pub const USER_TABLE: &str = "user";
pub const ORDER_TABLE: &str = "order";
pub const OFFER_TABLE: &str = "offer";

/// Drop order: children first, though nothing is enforced.
const TABLES: &[&str] = &[OFFER_TABLE, ORDER_TABLE, USER_TABLE];

pub fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Open a pool on `database_url`, creating the database file if it does not exist.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|_| ConfigError::Invalid {
            key: "DATABASE_URL",
            value: database_url.to_string(),
        })?
        .create_if_missing(true)
        .foreign_keys(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Drop every table and create the schema again. Leaves the store empty.
pub async fn reset_schema(pool: &SqlitePool) -> Result<(), AppError> {
    for table in TABLES {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", quote(table)))
            .execute(pool)
            .await?;
    }

    let user_ddl = format!(
        r#"
        CREATE TABLE {} (
            id INTEGER PRIMARY KEY,
            first_name TEXT,
            last_name TEXT,
            age INTEGER,
            email TEXT,
            role TEXT,
            phone TEXT
        )
        "#,
        quote(USER_TABLE)
    );
    sqlx::query(&user_ddl).execute(pool).await?;

    let order_ddl = format!(
        r#"
        CREATE TABLE {} (
            id INTEGER PRIMARY KEY,
            name TEXT,
            description TEXT,
            start_date TEXT,
            end_date TEXT,
            address TEXT,
            price INTEGER,
            customer_id INTEGER REFERENCES {user}(id),
            executor_id INTEGER REFERENCES {user}(id)
        )
        "#,
        quote(ORDER_TABLE),
        user = quote(USER_TABLE)
    );
    sqlx::query(&order_ddl).execute(pool).await?;

    let offer_ddl = format!(
        r#"
        CREATE TABLE {} (
            id INTEGER PRIMARY KEY,
            order_id INTEGER REFERENCES {order}(id),
            executor_id INTEGER REFERENCES {user}(id)
        )
        "#,
        quote(OFFER_TABLE),
        order = quote(ORDER_TABLE),
        user = quote(USER_TABLE)
    );
    sqlx::query(&offer_ddl).execute(pool).await?;

    tracing::debug!("schema recreated");
    Ok(())
}
