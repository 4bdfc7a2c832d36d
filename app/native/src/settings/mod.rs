//! Durable settings storage.
//!
//! The manager only needs a string-sequence value under a fixed key, plus an
//! explicit flush. [`JsonSettingsStore`] is the file-backed implementation
//! used by the CLI.

mod json_store;

pub use json_store::JsonSettingsStore;

use crate::core::Result;

/// Key/value store with a string-sequence value type.
pub trait SettingsBackend: Send + Sync {
    /// Reads a sequence. A missing key reads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error when the stored value is not a string sequence or the
    /// store cannot be read.
    fn get_string_sequence(&self, key: &str) -> Result<Vec<String>>;

    /// Replaces the sequence stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the value cannot be stored.
    fn set_string_sequence(&self, key: &str, values: &[String]) -> Result<()>;

    /// Forces pending writes to durable storage.
    ///
    /// # Errors
    ///
    /// Returns an error when the write fails.
    fn flush(&self) -> Result<()>;
}
