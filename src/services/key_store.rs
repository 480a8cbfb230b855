//! Key store service - load, generate and save API key records.
//!
//! The store is a single JSON file holding an array of records. Every
//! operation reads or rewrites the whole file.
//!
//! # Failure Handling
//!
//! - `load` never fails: a missing file is an empty store, and an unreadable
//!   or malformed file is logged and treated as empty. A corrupt store is
//!   therefore overwritten by the next `generate`.
//! - `try_load` reports the same failures as `StoreError` instead.
//! - `save` and `generate` log failures and return them to the caller.
//!
//! There is no locking. Two processes generating at once can race, and the
//! last writer wins.

use crate::{
    error::StoreError,
    models::api_key::{ApiKeyRecord, StoreEntry},
};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Handle to a JSON key store file.
#[derive(Debug, Clone)]
pub struct KeyStore {
    path: PathBuf,
}

impl KeyStore {
    /// Create a handle for the store file at `path`. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all records from the store file.
    ///
    /// # Returns
    ///
    /// The entries in stored order, or an empty vector if the file does not exist.
    /// Elements that are not complete records come back as `StoreEntry::Other`.
    ///
    /// # Errors
    ///
    /// - `Io`: file exists but could not be read
    /// - `Parse`: file is not a JSON array
    pub fn try_load(&self) -> Result<Vec<StoreEntry>, StoreError> {
        tracing::debug!("Loading API keys from {}", self.path.display());

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "API keys file not found at {}, starting with an empty list",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        let records: Vec<StoreEntry> =
            serde_json::from_str(&contents).map_err(|err| StoreError::parse(&self.path, err))?;

        tracing::info!("Loaded {} API keys", records.len());
        Ok(records)
    }

    /// Read all records, treating any failure as an empty store.
    ///
    /// The failure is logged before it is dropped.
    pub fn load(&self) -> Vec<StoreEntry> {
        self.try_load().unwrap_or_else(|err| {
            tracing::error!("Error loading API keys: {}", err);
            Vec::new()
        })
    }

    /// Overwrite the store file with `records`, pretty-printed with 2-space indentation.
    ///
    /// # Errors
    ///
    /// - `Serialize`: records could not be encoded
    /// - `Io`: file could not be written (e.g. parent directory missing)
    pub fn save(&self, records: &[StoreEntry]) -> Result<(), StoreError> {
        tracing::debug!(
            "Saving {} API keys to {}",
            records.len(),
            self.path.display()
        );

        let result = serde_json::to_string_pretty(records)
            .map_err(StoreError::from)
            .and_then(|json| {
                fs::write(&self.path, json).map_err(|err| StoreError::io(&self.path, err))
            });

        match &result {
            Ok(()) => tracing::info!("API keys saved successfully"),
            Err(err) => tracing::error!("Error saving API keys: {}", err),
        }

        result
    }

    /// Generate a new API key and append it to the store.
    ///
    /// # Process
    ///
    /// 1. Load existing records (an unreadable store counts as empty)
    /// 2. Create a record with a random UUID v4 and the current local time
    /// 3. Append it and rewrite the whole file
    ///
    /// # Returns
    ///
    /// The new key
    ///
    /// # Errors
    ///
    /// Any `save` error. The key is not persisted in that case.
    pub fn generate(&self) -> Result<String, StoreError> {
        let mut records = self.load();

        let record = ApiKeyRecord::generate();
        let key = record.key.clone();
        records.push(record.into());

        self.save(&records)?;

        tracing::info!("Generated new API key: {}", key);
        Ok(key)
    }
}
