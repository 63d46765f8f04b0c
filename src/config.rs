//! Configuration Module
//!
//! Loads client settings from environment variables and command-line flags.

use std::env;
use std::time::Duration;

use clap::Parser;

use crate::cache::MAX_INTERVAL;
use crate::error::{PokedexError, Result};

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults, and overridden again by command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache TTL and reap period in seconds
    pub cache_interval: u64,
    /// API root, without a trailing slash
    pub base_url: String,
    /// Number of location areas per page
    pub page_size: u32,
    /// HTTP request timeout in seconds
    pub request_timeout: u64,
}

/// Interactive Pokedex backed by PokeAPI
#[derive(Parser, Debug, Default)]
#[command(name = "pokedex")]
#[command(about = "Explore PokeAPI location areas and catch Pokemon from a REPL")]
#[command(version)]
pub struct Cli {
    /// Cache TTL and reap period in seconds [env: POKEDEX_CACHE_INTERVAL]
    #[arg(long, value_name = "SECS")]
    pub cache_interval: Option<u64>,

    /// PokeAPI root URL [env: POKEAPI_BASE_URL]
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Location areas shown per page [env: POKEDEX_PAGE_SIZE]
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,

    /// HTTP request timeout in seconds [env: POKEDEX_HTTP_TIMEOUT]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_INTERVAL` - Cache TTL in seconds (default: 10)
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_PAGE_SIZE` - Location areas per page (default: 20)
    /// - `POKEDEX_HTTP_TIMEOUT` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval: env::var("POKEDEX_CACHE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_interval),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| normalize_base_url(&v))
                .unwrap_or(defaults.base_url),
            page_size: env::var("POKEDEX_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.page_size),
            request_timeout: env::var("POKEDEX_HTTP_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout),
        }
    }

    /// Applies command-line overrides on top of this config.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(interval) = cli.cache_interval {
            self.cache_interval = interval;
        }
        if let Some(base_url) = &cli.base_url {
            self.base_url = normalize_base_url(base_url);
        }
        if let Some(page_size) = cli.page_size {
            self.page_size = page_size;
        }
        if let Some(timeout) = cli.timeout {
            self.request_timeout = timeout;
        }
        self
    }

    /// Rejects values the client cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.cache_interval == 0 {
            return Err(PokedexError::InvalidConfig(
                "cache interval must be at least 1 second".to_string(),
            ));
        }
        if self.cache_interval > MAX_INTERVAL.as_secs() {
            return Err(PokedexError::InvalidConfig(format!(
                "cache interval must be at most {} seconds",
                MAX_INTERVAL.as_secs()
            )));
        }
        if self.page_size == 0 {
            return Err(PokedexError::InvalidConfig(
                "page size must be at least 1".to_string(),
            ));
        }
        if self.request_timeout == 0 {
            return Err(PokedexError::InvalidConfig(
                "request timeout must be at least 1 second".to_string(),
            ));
        }
        if self.base_url.is_empty() {
            return Err(PokedexError::InvalidConfig(
                "base URL must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Cache TTL as a Duration.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    /// Request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: 10,
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 20,
            request_timeout: 10,
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
