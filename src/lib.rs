//! API key generator library.
//!
//! Generates random API keys and appends them, with their creation time, to
//! a JSON key store on disk.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::StoreError;
pub use models::api_key::{ApiKeyRecord, StoreEntry};
pub use services::key_store::KeyStore;
