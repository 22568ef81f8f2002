//! Collection and by-id routes for users, orders and offers.

use crate::handlers::{offers, orders, users};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/:id",
            get(users::read).put(users::update).delete(users::delete),
        )
        .route("/orders", get(orders::list).post(orders::create))
        .route(
            "/orders/:id",
            get(orders::read).put(orders::update).delete(orders::delete),
        )
        .route("/offers", get(offers::list).post(offers::create))
        .route(
            "/offers/:id",
            get(offers::read).put(offers::update).delete(offers::delete),
        )
        .with_state(state)
}
