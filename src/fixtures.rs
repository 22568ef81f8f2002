//! Fixture files: JSON arrays of records used to seed the store on startup.

use crate::error::FixtureError;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

pub const USERS_FILE: &str = "users.json";
pub const OFFERS_FILE: &str = "offers.json";
pub const ORDERS_FILE: &str = "orders.json";

/// Date format used by order fixtures, e.g. `02/08/2013`.
pub const FIXTURE_DATE_FORMAT: &str = "%m/%d/%Y";
/// How seeded dates are stored: a midnight timestamp.
pub const STORED_DATE_FORMAT: &str = "%Y-%m-%d 00:00:00";

#[derive(Clone, Debug, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub phone: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OrderRecord {
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

#[derive(Clone, Debug, Deserialize)]
pub struct OfferRecord {
    pub id: i64,
    pub order_id: i64,
    pub executor_id: i64,
}

/// Read `dir/file_name` and parse it as a JSON array of `T`.
pub async fn load_fixture<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<Vec<T>, FixtureError> {
    let path = dir.join(file_name);
    let text = tokio::fs::read_to_string(&path).await.map_err(|source| FixtureError::Io {
        file: path.display().to_string(),
        source,
    })?;
    parse_fixture(file_name, &text)
}

pub fn parse_fixture<T: DeserializeOwned>(file_name: &str, text: &str) -> Result<Vec<T>, FixtureError> {
    serde_json::from_str(text).map_err(|source| FixtureError::Parse {
        file: file_name.to_string(),
        source,
    })
}

/// Parse a fixture date (`%m/%d/%Y`) and render it the way seeded rows store it.
pub fn normalize_fixture_date(raw: &str) -> Option<String> {
    NaiveDate::parse_from_str(raw.trim(), FIXTURE_DATE_FORMAT)
        .ok()
        .map(|d| d.format(STORED_DATE_FORMAT).to_string())
}

impl OrderRecord {
    /// Dates converted to their stored form, or the first date that does not parse.
    pub fn stored_dates(&self) -> Result<(String, String), FixtureError> {
        let convert = |value: &str| {
            normalize_fixture_date(value).ok_or_else(|| FixtureError::Date {
                file: ORDERS_FILE.to_string(),
                id: self.id,
                value: value.to_string(),
            })
        };
        Ok((convert(&self.start_date)?, convert(&self.end_date)?))
    }
}
