//! Error types for key store operations.
//!
//! Every failure the store can hit is one of these variants. Callers decide
//! whether a failure is fatal: `KeyStore::load` swallows them, while
//! `KeyStore::save` and `KeyStore::generate` hand them back.

use std::path::PathBuf;

/// Key store error type.
///
/// # Error Categories
///
/// - **I/O Errors**: the store file could not be read or written
/// - **Parse Errors**: the store file exists but is not a JSON array of records
/// - **Serialize Errors**: the in-memory records could not be encoded
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the store file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file does not contain valid JSON records.
    #[error("Malformed key store {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding records to JSON failed.
    #[error("Failed to serialize key store: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::Parse {
            path: path.into(),
            source,
        }
    }
}
