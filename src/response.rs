//! Status codes for the bodiless write responses.

use axum::http::StatusCode;

/// POST on a collection, and DELETE on an offer.
pub const WRITTEN: StatusCode = StatusCode::OK;

/// PUT on any row, DELETE on users and orders.
pub const MODIFIED: StatusCode = StatusCode::NON_AUTHORITATIVE_INFORMATION;
