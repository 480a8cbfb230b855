//! API Key record model.
//!
//! One record pairs a generated key with the moment it was created. Records
//! are stored, in insertion order, as a JSON array in the key store file.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Represents one API key entry in the key store.
///
/// # JSON Example
///
/// ```json
/// {
///   "key": "550e8400-e29b-41d4-a716-446655440000",
///   "createdAt": "2026-10-18T09:14:03.512345+02:00"
/// }
/// ```
///
/// Both fields are kept as text, and any other fields on the object are
/// collected into `extra` and written back on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyRecord {
    /// The generated key (hyphenated UUID for records created here)
    pub key: String,

    /// Creation timestamp, ISO-8601 text
    #[serde(rename = "createdAt")]
    pub created_at: String,

    /// Fields written by other tools
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiKeyRecord {
    pub fn new(key: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            created_at: created_at.into(),
            extra: Map::new(),
        }
    }

    /// Create a record with a fresh random key stamped with the current local time.
    pub fn generate() -> Self {
        Self::new(
            Uuid::new_v4().to_string(),
            Local::now().to_rfc3339_opts(SecondsFormat::Micros, false),
        )
    }

    /// Parse `created_at` back into a timestamp.
    ///
    /// Accepts RFC 3339 text, or a naive ISO-8601 timestamp without offset
    /// which is read as local time. Returns `None` if neither matches.
    pub fn created_at_time(&self) -> Option<DateTime<FixedOffset>> {
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(&self.created_at) {
            return Some(timestamp);
        }

        let naive = self.created_at.parse::<NaiveDateTime>().ok()?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.fixed_offset())
    }
}

/// One element of the stored JSON array.
///
/// Elements that are not a well-formed record (missing `createdAt`, a
/// non-string `key`, not an object at all) are kept verbatim as `Other`, so
/// they survive being loaded and saved again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreEntry {
    Record(ApiKeyRecord),
    Other(Value),
}

impl StoreEntry {
    /// The record, if this element is one.
    pub fn record(&self) -> Option<&ApiKeyRecord> {
        match self {
            StoreEntry::Record(record) => Some(record),
            StoreEntry::Other(_) => None,
        }
    }

    /// The `key` of this element, if it has a string one.
    pub fn key(&self) -> Option<&str> {
        match self {
            StoreEntry::Record(record) => Some(&record.key),
            StoreEntry::Other(value) => value.get("key").and_then(Value::as_str),
        }
    }
}

impl From<ApiKeyRecord> for StoreEntry {
    fn from(record: ApiKeyRecord) -> Self {
        StoreEntry::Record(record)
    }
}
