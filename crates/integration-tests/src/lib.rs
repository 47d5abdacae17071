//! Integration tests for PizzaMama.
//!
//! Exercises the end-to-end cart flows (add, merge, update, remove, persist,
//! reload) and the catalog client against a local stub endpoint. No external
//! services are required.

use std::path::PathBuf;

/// Initialize test logging once; respects `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A unique cart storage key so parallel tests never share a slot.
#[must_use]
pub fn unique_storage_key() -> String {
    format!("pizzamama-test-{}", uuid::Uuid::new_v4())
}

/// Directory for test cart slots.
#[must_use]
pub fn storage_dir() -> PathBuf {
    std::env::temp_dir()
}
