//! Unified error handling.
//!
//! Library consumers that wire the whole storefront together get one error
//! type; individual modules keep their own taxonomies (`CatalogError`,
//! `StorageError`, `ConfigError`). Cart mutations themselves are infallible -
//! persistence failures are logged and swallowed at the storage boundary and
//! never escape into mutation logic or observer notification.

use thiserror::Error;

use crate::cart::storage::StorageError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog fetch failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Explicit cart storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
