//! CRUD REST service for users, orders and offers, stored in SQLite and seeded from JSON
//! fixtures on startup.

pub mod config;
pub mod error;
pub mod extractors;
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError, FixtureError};
pub use routes::{app, common_routes_with_ready, resource_routes};
pub use seed::{seed, SeedReport};
pub use service::{OfferService, OrderService, UserService};
pub use state::AppState;
pub use store::{connect, reset_schema};
