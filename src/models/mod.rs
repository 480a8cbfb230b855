//! Data models for the key store.

/// API key record model
pub mod api_key;
