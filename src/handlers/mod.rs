//! HTTP handlers for the users, orders and offers resources.

pub mod offers;
pub mod orders;
pub mod users;

use crate::error::AppError;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}
