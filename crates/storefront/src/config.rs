//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PIZZAMAMA_CATALOG_URL` - Catalog endpoint serving the product list
//!
//! ## Optional
//! - `PIZZAMAMA_CART_DIR` - Directory for the cart slot (default: temp dir)
//! - `PIZZAMAMA_CART_KEY` - Storage key for the cart slot (default: `pizzamama_cart`)
//! - `PIZZAMAMA_REQUEST_TIMEOUT_SECS` - Catalog request timeout (default: 10)
//! - `PIZZAMAMA_PAGE_SIZE` - Catalog page size for rendering (default: 12)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default storage key for the cart slot.
pub const DEFAULT_STORAGE_KEY: &str = "pizzamama_cart";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PAGE_SIZE: usize = 12;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog endpoint configuration.
    pub catalog: CatalogConfig,
    /// Cart persistence configuration.
    pub cart: CartConfig,
}

/// Catalog endpoint configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Endpoint serving the product list as JSON.
    pub endpoint: Url,
    /// Timeout applied to every catalog request.
    pub request_timeout: Duration,
    /// Products per rendered page.
    pub page_size: usize,
}

impl CatalogConfig {
    /// Create a catalog configuration with default timeout and page size.
    #[must_use]
    pub const fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Cart persistence configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory holding the cart slot file.
    pub storage_dir: PathBuf,
    /// Storage key; the slot is `<storage_dir>/<storage_key>.json`.
    pub storage_key: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: std::env::temp_dir(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
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
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let endpoint = parse_url("PIZZAMAMA_CATALOG_URL", &get_required_env("PIZZAMAMA_CATALOG_URL")?)?;
        let request_timeout_secs = parse_u64(
            "PIZZAMAMA_REQUEST_TIMEOUT_SECS",
            &get_env_or_default("PIZZAMAMA_REQUEST_TIMEOUT_SECS", "10"),
        )?;
        let page_size = parse_usize(
            "PIZZAMAMA_PAGE_SIZE",
            &get_env_or_default("PIZZAMAMA_PAGE_SIZE", "12"),
        )?;

        let storage_dir = get_optional_env("PIZZAMAMA_CART_DIR")
            .map_or_else(std::env::temp_dir, PathBuf::from);
        let storage_key = get_env_or_default("PIZZAMAMA_CART_KEY", DEFAULT_STORAGE_KEY);

        Ok(Self {
            catalog: CatalogConfig {
                endpoint,
                request_timeout: Duration::from_secs(request_timeout_secs),
                page_size,
            },
            cart: CartConfig {
                storage_dir,
                storage_key,
            },
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a URL-valued variable.
fn parse_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse an integer-valued variable.
fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a count-valued variable.
fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .parse::<usize>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
