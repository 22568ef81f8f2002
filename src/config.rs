//! Server configuration from environment (`.env` honoured via dotenvy).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://market.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    /// Directory holding users.json, offers.json and orders.json.
    pub fixtures_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub body_limit: usize,
}

impl ServerConfig {
    /// Read from process environment. Unset keys fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let fixtures_dir = PathBuf::from(lookup("FIXTURES_DIR").unwrap_or_else(|| ".".into()));
        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), DEFAULT_BIND_ADDR.parse().ok())?;
        let max_connections = parse_or("MAX_CONNECTIONS", lookup("MAX_CONNECTIONS"), Some(DEFAULT_MAX_CONNECTIONS))?;
        let body_limit = parse_or("BODY_LIMIT_BYTES", lookup("BODY_LIMIT_BYTES"), Some(DEFAULT_BODY_LIMIT))?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        Ok(Self {
            database_url,
            fixtures_dir,
            bind_addr,
            max_connections,
            body_limit,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: Option<T>,
) -> Result<T, ConfigError> {
    match raw {
        Some(s) => s.trim().parse().map_err(|_| ConfigError::Invalid { key, value: s }),
        None => default.ok_or(ConfigError::Invalid {
            key,
            value: String::new(),
        }),
    }
}
