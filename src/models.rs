//! Row types for the three tables and the request payloads that write them.
//!
//! Field order here is the JSON field order on the wire.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Offer {
    pub id: i64,
    pub order_id: i64,
    pub executor_id: i64,
}

/// Body of POST and PUT /users. Every key is required.
#[derive(Clone, Debug, Deserialize)]
pub struct UserInput {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub phone: String,
}

/// Body of POST and PUT /orders. Dates are kept as the submitted text.
#[derive(Clone, Debug, Deserialize)]
pub struct OrderInput {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OfferInput {
    pub order_id: i64,
    pub executor_id: i64,
}

/// A user reference in the orders list: the user's first name when the row exists,
/// otherwise the raw id.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UserRef {
    Name(String),
    Id(i64),
}

/// One element of GET /orders.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrderListItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i64,
    pub customer_id: UserRef,
    pub executor_id: UserRef,
}

impl OrderListItem {
    pub fn from_order(order: Order, customer: UserRef, executor: UserRef) -> Self {
        Self {
            id: order.id,
            name: order.name,
            description: order.description,
            start_date: order.start_date,
            end_date: order.end_date,
            address: order.address,
            price: order.price,
            customer_id: customer,
            executor_id: executor,
        }
    }
}
