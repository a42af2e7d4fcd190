use std::path::PathBuf;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;
use tracing::{info, info_span, warn};
use uuid::Uuid;

use datadrift_core::ConfigurationError;
use datadrift_generate::{GenerateOptions, GenerationEngine, lookup};

use crate::errors::HandlerError;
use crate::request::GenerationRequest;
use crate::response::HandlerResponse;
use crate::upload::ObjectStore;

/// Options for the invocation handler.
#[derive(Debug, Clone)]
pub struct HandlerOptions {
    /// Directory where the transient CSV artifact is written.
    pub work_dir: PathBuf,
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self {
            work_dir: std::env::temp_dir(),
        }
    }
}

/// Drives one generation run per invocation and uploads the artifact.
pub struct Handler<S> {
    store: S,
    options: HandlerOptions,
}

impl<S: ObjectStore> Handler<S> {
    pub fn new(store: S, options: HandlerOptions) -> Self {
        Self { store, options }
    }

    /// Handle a payload given as JSON text.
    pub fn handle_str(&self, payload: &str) -> HandlerResponse {
        match serde_json::from_str::<Value>(payload) {
            Ok(event) => self.handle(event),
            Err(err) => {
                HandlerError::from(ConfigurationError::payload(err.to_string())).into_response()
            }
        }
    }

    pub fn handle(&self, event: Value) -> HandlerResponse {
        let run_id = Uuid::new_v4().to_string();
        let span = info_span!("invocation", run_id = %run_id);
        let _guard = span.enter();

        let start = Instant::now();
        let response = match self.run(event) {
            Ok(location) => HandlerResponse::ok(format!("CSV file uploaded to {location}")),
            Err(err) => {
                warn!(event = "run_failed", error = %err);
                err.into_response()
            }
        };

        info!(
            event = "run_finished",
            status = %response.status,
            duration_ms = start.elapsed().as_millis() as u64
        );
        response
    }

    fn run(&self, event: Value) -> Result<String, HandlerError> {
        let request = GenerationRequest::from_value(event)?;
        let config = request.configuration()?;
        let definition = lookup(&request.dataset_type)?;
        let file_name = request.artifact_name()?;
        let path = self.options.work_dir.join(&file_name);

        info!(
            event = "run_started",
            dataset = definition.name,
            artifact = %path.display()
        );

        let engine = GenerationEngine::new(GenerateOptions {
            schema_drift: request.schema_drift,
            data_errors: request.data_errors,
            ..GenerateOptions::default()
        });
        let mut rng = StdRng::from_os_rng();
        let result = engine.run(definition, &config, &path, &mut rng)?;

        info!(
            event = "artifact_written",
            rows = result.rows_written,
            columns = result.columns.len(),
            path = %result.path.display()
        );

        let bucket = request.bucket().ok_or(HandlerError::MissingBucket)?;
        let key = request.s3_key.as_deref().unwrap_or(&file_name);

        info!(event = "upload_started", bucket, key);
        let upload_start = Instant::now();
        let location = self.store.upload(&result.path, bucket, key)?;
        info!(
            event = "upload_finished",
            location = %location,
            duration_ms = upload_start.elapsed().as_millis() as u64
        );

        Ok(location)
    }
}
