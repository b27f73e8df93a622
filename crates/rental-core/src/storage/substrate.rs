//! Key-value substrate the record store persists into

use thiserror::Error;

/// Substrate errors
#[derive(Error, Debug)]
pub enum SubstrateError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Quota exceeded writing {bytes} bytes to '{key}'")]
    QuotaExceeded { key: String, bytes: usize },
}

/// Synchronous string-to-string storage
///
/// Writes replace the whole value under a key. Implementations are not
/// expected to coordinate between processes.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` when nothing is stored
    ///
    /// # Errors
    /// Returns an error if the substrate cannot be read
    fn read(&self, key: &str) -> Result<Option<String>, SubstrateError>;

    /// Replace the value under `key`
    ///
    /// # Errors
    /// Returns an error if the value was not stored
    fn write(&self, key: &str, value: &str) -> Result<(), SubstrateError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn read(&self, key: &str) -> Result<Option<String>, SubstrateError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SubstrateError> {
        (**self).write(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn read(&self, key: &str) -> Result<Option<String>, SubstrateError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SubstrateError> {
        (**self).write(key, value)
    }
}
