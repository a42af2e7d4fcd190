use std::path::Path;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use datadrift_core::{
    ConfigValidator, Configuration, ConfigurationError, DEFAULT_DUPLICATE_COUNT,
    DEFAULT_NULL_PROBABILITY, DEFAULT_ROW_COUNT,
};

/// Invocation payload. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GenerationRequest {
    /// Artifact file name; only its final path component is used.
    #[serde(default = "default_filename")]
    pub filename: String,
    #[serde(default)]
    pub config: RawConfig,
    /// Randomly rename or drop output columns.
    #[serde(default)]
    pub schema_drift: bool,
    /// Randomly flip value types.
    #[serde(default)]
    pub data_errors: bool,
    #[serde(default = "default_dataset_type")]
    pub dataset_type: String,
    /// Destination bucket; required for upload.
    #[serde(default)]
    pub s3_bucket: Option<String>,
    /// Destination key; defaults to the artifact file name.
    #[serde(default)]
    pub s3_key: Option<String>,
}

/// Generation parameters exactly as they arrived, validated later.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RawConfig {
    #[serde(default = "default_num_rows")]
    #[schemars(with = "u64")]
    pub num_rows: Value,
    #[serde(default = "default_num_duplicates")]
    #[schemars(with = "u64")]
    pub num_duplicates: Value,
    #[serde(default = "default_null_probability")]
    #[schemars(with = "f64")]
    pub null_probability: Value,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            num_rows: default_num_rows(),
            num_duplicates: default_num_duplicates(),
            null_probability: default_null_probability(),
        }
    }
}

impl GenerationRequest {
    pub fn from_value(value: Value) -> Result<Self, ConfigurationError> {
        if !value.is_object() {
            return Err(ConfigurationError::payload("payload must be a JSON object"));
        }
        serde_json::from_value(value).map_err(|err| ConfigurationError::payload(err.to_string()))
    }

    pub fn from_json_str(payload: &str) -> Result<Self, ConfigurationError> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|err| ConfigurationError::payload(err.to_string()))?;
        Self::from_value(value)
    }

    pub fn configuration(&self) -> Result<Configuration, ConfigurationError> {
        ConfigValidator::validate(
            &self.config.num_rows,
            &self.config.num_duplicates,
            &self.config.null_probability,
        )
    }

    /// Final path component of `filename`.
    pub fn artifact_name(&self) -> Result<String, ConfigurationError> {
        Path::new(&self.filename)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ConfigurationError::payload(format!("filename '{}' has no file name", self.filename))
            })
    }

    /// Bucket if present and non-empty.
    pub fn bucket(&self) -> Option<&str> {
        self.s3_bucket.as_deref().filter(|bucket| !bucket.is_empty())
    }
}

fn default_filename() -> String {
    "default.csv".to_string()
}

fn default_dataset_type() -> String {
    "employee".to_string()
}

fn default_num_rows() -> Value {
    Value::from(DEFAULT_ROW_COUNT)
}

fn default_num_duplicates() -> Value {
    Value::from(DEFAULT_DUPLICATE_COUNT)
}

fn default_null_probability() -> Value {
    Value::from(DEFAULT_NULL_PROBABILITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_payload_uses_defaults() {
        let request = GenerationRequest::from_value(json!({})).unwrap();
        assert_eq!(request.filename, "default.csv");
        assert_eq!(request.dataset_type, "employee");
        assert!(!request.schema_drift);
        assert!(!request.data_errors);
        assert_eq!(request.bucket(), None);

        let config = request.configuration().unwrap();
        assert_eq!(config.row_count(), 100);
        assert_eq!(config.duplicate_count(), 0);
        assert_eq!(config.null_probability(), 0.1);
    }

    #[test]
    fn artifact_name_strips_directories() {
        let request =
            GenerationRequest::from_value(json!({ "filename": "../../etc/out.csv" })).unwrap();
        assert_eq!(request.artifact_name().unwrap(), "out.csv");

        let request = GenerationRequest::from_value(json!({ "filename": "" })).unwrap();
        assert!(request.artifact_name().is_err());
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(GenerationRequest::from_value(json!([1, 2])).is_err());
        assert!(GenerationRequest::from_json_str("{not json").is_err());
        assert!(GenerationRequest::from_value(json!({ "schema_drift": "yes" })).is_err());
    }

    #[test]
    fn explicit_null_is_not_a_default() {
        let request =
            GenerationRequest::from_value(json!({ "config": { "num_rows": null } })).unwrap();
        assert!(request.configuration().is_err());
    }
}
