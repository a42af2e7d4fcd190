use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::drift::DriftRates;
use crate::transforms::types::TYPE_ERROR_RATE;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Rename or drop output columns.
    pub schema_drift: bool,
    /// Flip value types between numeric and textual forms.
    pub data_errors: bool,
    pub drift_rates: DriftRates,
    pub type_error_rate: f64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            schema_drift: false,
            data_errors: false,
            drift_rates: DriftRates::default(),
            type_error_rate: TYPE_ERROR_RATE,
        }
    }
}

/// Result of a generation run written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub path: PathBuf,
    pub columns: Vec<String>,
    /// Data rows, duplicates included; the header is not counted.
    pub rows_written: u64,
    pub bytes_written: u64,
}
