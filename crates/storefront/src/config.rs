//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `HANAMI_DATA_DIR` - Directory holding the persisted cart and wishlist (default: `.hanami`)
//! - `HANAMI_CATALOG_LIST_LATENCY_MS` - Simulated catalog listing delay (default: 1000)
//! - `HANAMI_CATALOG_ITEM_LATENCY_MS` - Simulated product lookup delay (default: 500)
//! - `HANAMI_CATALOG_CACHE_TTL_SECS` - Catalog cache time-to-live (default: 300)
//! - `HANAMI_REHYDRATION` - `load` or `replay` (default: `load`)
//! - `HANAMI_LOG_FORMAT` - `pretty` or `json` (default: `pretty`)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::persistence::RehydrationStrategy;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format {other:?}")),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory for durable key-value storage
    pub data_dir: PathBuf,
    /// Catalog behavior
    pub catalog: CatalogConfig,
    /// How the persisted cart and wishlist are restored at startup
    pub rehydration: RehydrationStrategy,
    /// Log output format
    pub log_format: LogFormat,
}

/// Catalog latency and caching configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Simulated delay for a full listing
    pub list_latency: Duration,
    /// Simulated delay for a single-product lookup
    pub item_latency: Duration,
    /// Time-to-live of cached catalog answers
    pub cache_ttl: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            list_latency: Duration::from_millis(1000),
            item_latency: Duration::from_millis(500),
            cache_ttl: Duration::from_secs(300),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".hanami"),
            catalog: CatalogConfig::default(),
            rehydration: RehydrationStrategy::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_dir = lookup("HANAMI_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);
        let catalog = CatalogConfig {
            list_latency: parse_or(&lookup, "HANAMI_CATALOG_LIST_LATENCY_MS", 1000)
                .map(Duration::from_millis)?,
            item_latency: parse_or(&lookup, "HANAMI_CATALOG_ITEM_LATENCY_MS", 500)
                .map(Duration::from_millis)?,
            cache_ttl: parse_or(&lookup, "HANAMI_CATALOG_CACHE_TTL_SECS", 300)
                .map(Duration::from_secs)?,
        };
        let rehydration = parse_or(&lookup, "HANAMI_REHYDRATION", defaults.rehydration)?;
        let log_format = parse_or(&lookup, "HANAMI_LOG_FORMAT", defaults.log_format)?;

        Ok(Self {
            data_dir,
            catalog,
            rehydration,
            log_format,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable, falling back to `default` when it is unset.
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}
