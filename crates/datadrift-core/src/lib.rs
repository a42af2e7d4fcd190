//! Core contracts for datadrift.
//!
//! This crate defines the validated generation configuration shared by the
//! generation engine and the invocation handler.

pub mod config;
pub mod error;

pub use config::{ConfigField, ConfigValidator, Configuration};
pub use error::{ConfigurationError, Result};

/// Rows generated when the payload omits `num_rows`.
pub const DEFAULT_ROW_COUNT: u64 = 100;
/// Duplicates injected when the payload omits `num_duplicates`.
pub const DEFAULT_DUPLICATE_COUNT: u64 = 0;
/// Null probability used when the payload omits `null_probability`.
pub const DEFAULT_NULL_PROBABILITY: f64 = 0.1;
