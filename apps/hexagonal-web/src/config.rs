//! Application configuration loaded from the environment

use anyhow::{Context, Result};
use tracing::info;

pub const HOST_VAR: &str = "HEXAGONAL_HOST";
pub const PORT_VAR: &str = "HEXAGONAL_PORT";
pub const DATABASE_VAR: &str = "HEXAGONAL_DATABASE";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Database location that selects an in-memory SQLite store
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Runtime configuration of the web adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind the HTTP server to
    pub host: String,
    /// Port to bind the HTTP server to
    pub port: u16,
    /// SQLite database path, or `:memory:`
    pub database: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: IN_MEMORY_DATABASE.to_string(),
        }
    }
}

impl AppConfig {
    /// Read the configuration from process environment variables
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup(HOST_VAR).unwrap_or_else(|| {
            info!("{} not set, using default: {}", HOST_VAR, defaults.host);
            defaults.host.clone()
        });

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("{} must be a valid port number, got '{}'", PORT_VAR, raw))?,
            None => {
                info!("{} not set, using default: {}", PORT_VAR, defaults.port);
                defaults.port
            }
        };

        let database = lookup(DATABASE_VAR).unwrap_or_else(|| {
            info!("{} not set, using default: {}", DATABASE_VAR, defaults.database);
            defaults.database.clone()
        });

        Ok(Self {
            host,
            port,
            database,
        })
    }

    /// Address the HTTP server binds to, as `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether the configured database is an in-memory store
    pub fn is_in_memory(&self) -> bool {
        self.database == IN_MEMORY_DATABASE
    }
}
