//! API Key Generator - Command Line Entry Point
//!
//! Generates one API key per run and appends it to the JSON key store.
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration from environment variables (defaults on failure)
//! 3. Generate a key and save the store
//! 4. Report the result on standard output
//!
//! Failures are reported but never change the exit status.

use anyhow::Context;
use api_keygen::{Config, KeyStore};
use tracing_subscriber::EnvFilter;

fn main() {
    // Reads RUST_LOG (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env().context("Failed to load configuration") {
        Ok(config) => {
            tracing::debug!("Configuration loaded: {:?}", config);
            config
        }
        Err(err) => {
            tracing::error!("{:#}, using defaults", err);
            Config::default()
        }
    };

    let store = KeyStore::new(config.api_keys_file);

    match store.generate() {
        Ok(key) => println!("Generated new API key: {}", key),
        Err(_) => println!("Failed to generate a new API key."),
    }
}
