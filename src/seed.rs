//! Startup seeding: wipe the store and bulk-insert the fixture files.

use crate::error::AppError;
use crate::fixtures::{load_fixture, OfferRecord, OrderRecord, UserRecord, OFFERS_FILE, ORDERS_FILE, USERS_FILE};
use crate::store::{quote, reset_schema, OFFER_TABLE, ORDER_TABLE, USER_TABLE};
use sqlx::SqlitePool;
use std::path::Path;

/// Rows inserted per table by [`seed`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: u64,
    pub offers: u64,
    pub orders: u64,
}

/// Drop and recreate all tables, then load users, offers and orders (in that order) from
/// `fixtures_dir`. Each table is filled in its own transaction; fixture ids are kept.
pub async fn seed(pool: &SqlitePool, fixtures_dir: &Path) -> Result<SeedReport, AppError> {
    reset_schema(pool).await?;

    let users: Vec<UserRecord> = load_fixture(fixtures_dir, USERS_FILE).await?;
    let users = insert_users(pool, &users).await?;

    let offers: Vec<OfferRecord> = load_fixture(fixtures_dir, OFFERS_FILE).await?;
    let offers = insert_offers(pool, &offers).await?;

    let orders: Vec<OrderRecord> = load_fixture(fixtures_dir, ORDERS_FILE).await?;
    let orders = insert_orders(pool, &orders).await?;

    let report = SeedReport { users, offers, orders };
    tracing::info!(users = report.users, offers = report.offers, orders = report.orders, "store seeded");
    Ok(report)
}

async fn insert_users(pool: &SqlitePool, records: &[UserRecord]) -> Result<u64, AppError> {
    let sql = format!(
        "INSERT INTO {} (id, first_name, last_name, age, email, role, phone) VALUES (?, ?, ?, ?, ?, ?, ?)",
        quote(USER_TABLE)
    );
    let mut tx = pool.begin().await?;
    let mut count = 0u64;
    for r in records {
        sqlx::query(&sql)
            .bind(r.id)
            .bind(&r.first_name)
            .bind(&r.last_name)
            .bind(r.age)
            .bind(&r.email)
            .bind(&r.role)
            .bind(&r.phone)
            .execute(&mut *tx)
            .await?;
        count += 1;
    }
    tx.commit().await?;
    Ok(count)
}

async fn insert_offers(pool: &SqlitePool, records: &[OfferRecord]) -> Result<u64, AppError> {
    let sql = format!(
        "INSERT INTO {} (id, order_id, executor_id) VALUES (?, ?, ?)",
        quote(OFFER_TABLE)
    );
    let mut tx = pool.begin().await?;
    let mut count = 0u64;
    for r in records {
        sqlx::query(&sql)
            .bind(r.id)
            .bind(r.order_id)
            .bind(r.executor_id)
            .execute(&mut *tx)
            .await?;
        count += 1;
    }
    tx.commit().await?;
    Ok(count)
}

async fn insert_orders(pool: &SqlitePool, records: &[OrderRecord]) -> Result<u64, AppError> {
    let sql = format!(
        "INSERT INTO {} (id, name, description, start_date, end_date, address, price, customer_id, executor_id) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        quote(ORDER_TABLE)
    );
    let mut tx = pool.begin().await?;
    let mut count = 0u64;
    for r in records {
        let (start_date, end_date) = r.stored_dates()?;
        sqlx::query(&sql)
            .bind(r.id)
            .bind(&r.name)
            .bind(&r.description)
            .bind(start_date)
            .bind(end_date)
            .bind(&r.address)
            .bind(r.price)
            .bind(r.customer_id)
            .bind(r.executor_id)
            .execute(&mut *tx)
            .await?;
        count += 1;
    }
    tx.commit().await?;
    Ok(count)
}
