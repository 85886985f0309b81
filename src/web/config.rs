//! Server configuration read from the environment.
//!
//! - `TASKBOARD_HOST`: bind host, default `127.0.0.1`
//! - `TASKBOARD_PORT`: bind port, default `8000`
//! - `TASKBOARD_DATABASE_URL`: `SQLite` database path, default
//!   `taskboard.sqlite3`; `:memory:` selects the in-memory datastore
//! - `TASKBOARD_POOL_SIZE`: `SQLite` connection pool size, default `4`
//! - `TASKBOARD_SEED_CATEGORIES`: comma-separated category names created at
//!   start-up; only read for the in-memory datastore, which no other process
//!   can reach

use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_URL: &str = "taskboard.sqlite3";
const DEFAULT_POOL_SIZE: u32 = 4;

/// Database URL that selects the in-memory datastore.
pub const IN_MEMORY_URL: &str = ":memory:";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set to a value that cannot be used.
    #[error("invalid value for {name}: {reason}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Where tasks and categories are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Datastore {
    /// Process-local storage, lost on exit.
    InMemory {
        /// Category names created before serving.
        seed_categories: Vec<String>,
    },
    /// `SQLite` database file.
    Sqlite {
        /// Database path or URL passed to the connection manager.
        url: String,
        /// Maximum number of pooled connections.
        pool_size: u32,
    },
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Selected datastore.
    pub datastore: Datastore,
}

impl Config {
    /// Loads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("TASKBOARD_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parse_or("TASKBOARD_PORT", lookup("TASKBOARD_PORT"), DEFAULT_PORT)?;
        let pool_size = parse_or(
            "TASKBOARD_POOL_SIZE",
            lookup("TASKBOARD_POOL_SIZE"),
            DEFAULT_POOL_SIZE,
        )?;
        if pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                name: "TASKBOARD_POOL_SIZE",
                reason: "must be at least 1".to_owned(),
            });
        }

        let url = lookup("TASKBOARD_DATABASE_URL")
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());
        let datastore = if url == IN_MEMORY_URL {
            Datastore::InMemory {
                seed_categories: lookup("TASKBOARD_SEED_CATEGORIES")
                    .map(|raw| split_names(&raw))
                    .unwrap_or_default(),
            }
        } else {
            Datastore::Sqlite { url, pool_size }
        };

        Ok(Self {
            host,
            port,
            datastore,
        })
    }

    /// Returns the `host:port` address to bind. IP literals are formatted
    /// as socket addresses, so IPv6 hosts are bracketed.
    #[must_use]
    pub fn bind_address(&self) -> String {
        self.host.parse::<IpAddr>().map_or_else(
            |_| format!("{}:{}", self.host, self.port),
            |ip| SocketAddr::new(ip, self.port).to_string(),
        )
    }
}

fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_or<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|err: T::Err| ConfigError::InvalidValue {
                name,
                reason: err.to_string(),
            })
    })
}
