//! Core of the price update tool.
//!
//! Everything here is plain Rust with no browser dependency, so the whole
//! upload/validate/update workflow can be exercised with `cargo test`:
//! - `intake` reads the picked CSV file,
//! - `shape` checks its column structure offline,
//! - `workflow` gates the Validate and Update actions,
//! - `currency`, `config` and `requests` support the UI and its HTTP calls.

pub mod config;
pub mod currency;
pub mod error;
pub mod intake;
pub mod model;
pub mod requests;
pub mod shape;
pub mod workflow;
