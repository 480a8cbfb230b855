//! Key store services.
//!
//! Services hold the file handling and record bookkeeping, separate from
//! the command-line entry point.

pub mod key_store;
