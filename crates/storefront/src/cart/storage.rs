//! Durable cart persistence.
//!
//! The cart lives in a single key-value slot holding a JSON array of line
//! items. Reads are fail-soft: a missing, unreadable, or corrupt slot yields
//! an empty cart rather than failing startup. Writes report errors so the
//! store can log them, but callers never treat a failed save as fatal.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

use super::LineItem;

/// Errors that can occur when writing the cart slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cart could not be encoded as JSON.
    #[error("JSON encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The backend refuses writes (disabled storage, quota exceeded).
    #[error("storage unavailable")]
    Unavailable,
}

/// Serialize/deserialize the line-item collection to a durable slot.
pub trait CartStorage {
    /// Read the previously saved collection.
    ///
    /// Returns an empty collection if the slot is absent, corrupt, or the
    /// backend is unavailable - decoding errors are logged and swallowed.
    fn load(&self) -> Vec<LineItem>;

    /// Serialize and write the collection. Best-effort: the caller logs the
    /// error and continues with its in-memory state.
    fn save(&self, items: &[LineItem]) -> Result<(), StorageError>;
}

/// File-backed storage: the slot is `<dir>/<storage key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a slot under `dir` named after the storage key.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, storage_key: &str) -> Self {
        let mut path = dir.into();
        path.push(format!("{storage_key}.json"));
        Self { path }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Vec<LineItem> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "failed to read cart slot; starting with an empty cart"
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(items) => items,
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "corrupt cart slot; starting with an empty cart"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, items: &[LineItem]) -> Result<(), StorageError> {
        let json = serde_json::to_vec(items)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral sessions.
///
/// Clones share the same slot, so a test can hand one clone to the store and
/// keep another to inspect the persisted copy or inject write failures.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    slot: Option<Vec<LineItem>>,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `save` calls fail with [`StorageError::Unavailable`],
    /// simulating disabled storage or an exceeded quota.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// The persisted copy, or `None` if nothing was ever saved.
    #[must_use]
    pub fn saved(&self) -> Option<Vec<LineItem>> {
        self.inner.borrow().slot.clone()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Vec<LineItem> {
        self.inner.borrow().slot.clone().unwrap_or_default()
    }

    fn save(&self, items: &[LineItem]) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(StorageError::Unavailable);
        }
        inner.slot = Some(items.to_vec());
        Ok(())
    }
}
