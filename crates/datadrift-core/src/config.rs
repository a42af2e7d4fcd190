use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ConfigurationError, Result};

/// Names the configuration input a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigField {
    NumRows,
    NumDuplicates,
    NullProbability,
    Payload,
}

impl ConfigField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NumRows => "num_rows",
            Self::NumDuplicates => "num_duplicates",
            Self::NullProbability => "null_probability",
            Self::Payload => "payload",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated generation parameters.
///
/// Fields are private so a `Configuration` can only be obtained through
/// validation; every value handed to the engine satisfies
/// `row_count > 0`, `duplicate_count <= row_count` and
/// `0.0 <= null_probability <= 1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Configuration {
    row_count: u64,
    duplicate_count: u64,
    null_probability: f64,
}

impl Configuration {
    /// Build a configuration from typed values.
    pub fn new(row_count: u64, duplicate_count: u64, null_probability: f64) -> Result<Self> {
        check_row_count(row_count)?;
        check_duplicate_count(duplicate_count, row_count)?;
        check_null_probability(null_probability)?;
        Ok(Self {
            row_count,
            duplicate_count,
            null_probability,
        })
    }

    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    pub fn duplicate_count(&self) -> u64 {
        self.duplicate_count
    }

    pub fn null_probability(&self) -> f64 {
        self.null_probability
    }

    /// Rows in the final dataset, duplicates included.
    pub fn total_rows(&self) -> u64 {
        self.row_count.saturating_add(self.duplicate_count)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            row_count: crate::DEFAULT_ROW_COUNT,
            duplicate_count: crate::DEFAULT_DUPLICATE_COUNT,
            null_probability: crate::DEFAULT_NULL_PROBABILITY,
        }
    }
}

/// Validates raw (untyped) generation parameters as they arrive in a payload.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the three raw values in order, stopping at the first violation.
    pub fn validate(
        num_rows: &Value,
        num_duplicates: &Value,
        null_probability: &Value,
    ) -> Result<Configuration> {
        let row_count = integer(num_rows)
            .and_then(|value| u64::try_from(value).ok())
            .ok_or_else(row_count_error)?;
        check_row_count(row_count)?;

        let duplicate_count = integer(num_duplicates)
            .and_then(|value| u64::try_from(value).ok())
            .ok_or_else(duplicate_count_error)?;
        check_duplicate_count(duplicate_count, row_count)?;

        let null_probability = null_probability.as_f64().ok_or_else(null_probability_error)?;
        check_null_probability(null_probability)?;

        Ok(Configuration {
            row_count,
            duplicate_count,
            null_probability,
        })
    }
}

/// JSON integers only; `10.0` is a float and does not qualify.
fn integer(value: &Value) -> Option<i128> {
    value
        .as_i64()
        .map(i128::from)
        .or_else(|| value.as_u64().map(i128::from))
}

fn check_row_count(row_count: u64) -> Result<()> {
    if row_count == 0 {
        return Err(row_count_error());
    }
    Ok(())
}

fn check_duplicate_count(duplicate_count: u64, row_count: u64) -> Result<()> {
    if duplicate_count > row_count {
        return Err(duplicate_count_error());
    }
    Ok(())
}

fn check_null_probability(null_probability: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&null_probability) {
        return Err(null_probability_error());
    }
    Ok(())
}

fn row_count_error() -> ConfigurationError {
    ConfigurationError::new(ConfigField::NumRows, "num_rows must be a positive integer")
}

fn duplicate_count_error() -> ConfigurationError {
    ConfigurationError::new(
        ConfigField::NumDuplicates,
        "num_duplicates must be an integer between 0 and num_rows",
    )
}

fn null_probability_error() -> ConfigurationError {
    ConfigurationError::new(
        ConfigField::NullProbability,
        "null_probability must be a number between 0 and 1",
    )
}
