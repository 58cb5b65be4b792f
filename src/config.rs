//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::DEFAULT_MAX_ENTRIES;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Largest `per_page` accepted by `GET /books`
    pub max_per_page: u64,
    /// Rows per page in the list widget
    pub widget_per_page: u64,
    /// Outstanding form nonces kept before the oldest is dropped
    pub nonce_capacity: usize,
    /// Cached listings kept before the least recently used is evicted
    pub cache_max_entries: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MAX_PER_PAGE` - Upper bound for `per_page` (default: 100)
    /// - `WIDGET_PER_PAGE` - List widget page size (default: 10)
    /// - `NONCE_CAPACITY` - Outstanding form nonces (default: 1024)
    /// - `CACHE_MAX_ENTRIES` - Cached listings (default: 1000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            max_per_page: env_or("MAX_PER_PAGE", defaults.max_per_page),
            widget_per_page: env_or("WIDGET_PER_PAGE", defaults.widget_per_page),
            nonce_capacity: env_or("NONCE_CAPACITY", defaults.nonce_capacity),
            cache_max_entries: env_or("CACHE_MAX_ENTRIES", defaults.cache_max_entries),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            max_per_page: 100,
            widget_per_page: 10,
            nonce_capacity: 1024,
            cache_max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}
