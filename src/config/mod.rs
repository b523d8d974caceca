//! Configuration model for obsgrade.
//!
//! This module defines the Config struct read from an optional YAML file.
//! It supports forward-compatible parsing (unknown fields are ignored),
//! defaults that reproduce the built-in taxonomy exactly, and validation of
//! rule names referenced by overrides.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::DEFAULT_FALLBACK_FEEDBACK;
