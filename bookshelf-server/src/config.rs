//! Database connection settings resolved from `POSTGRES_*` environment variables
//!
//! Every variable is optional. An unset or empty variable falls back to its
//! default, so a bare `bookshelf` run talks to a stock local PostgreSQL.

use std::fmt;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

pub const ENV_HOST: &str = "POSTGRES_HOST";
pub const ENV_PORT: &str = "POSTGRES_PORT";
pub const ENV_USER: &str = "POSTGRES_USER";
pub const ENV_PASSWORD: &str = "POSTGRES_PASSWORD";
pub const ENV_DATABASE: &str = "POSTGRES_DB";

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: &str = "5432";
const DEFAULT_USER: &str = "postgres";
const DEFAULT_PASSWORD: &str = "password";
const DEFAULT_DATABASE: &str = "postgres";

/// Configuration errors detected before any connection attempt
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value '{value}': expected a port number")]
    InvalidPort { var: &'static str, value: String },
}

/// PostgreSQL connection parameters
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a map lookup instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let raw_port = get(ENV_PORT, DEFAULT_PORT);
        let port = raw_port.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
            var: ENV_PORT,
            value: raw_port.clone(),
        })?;

        Ok(Self {
            host: get(ENV_HOST, DEFAULT_HOST),
            port,
            user: get(ENV_USER, DEFAULT_USER),
            password: get(ENV_PASSWORD, DEFAULT_PASSWORD),
            database: get(ENV_DATABASE, DEFAULT_DATABASE),
        })
    }

    /// Connection options for sqlx. TLS is disabled.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(PgSslMode::Disable)
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}
