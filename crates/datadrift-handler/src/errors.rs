use thiserror::Error;

use datadrift_core::ConfigurationError;
use datadrift_generate::GenerationError;

use crate::response::{HandlerResponse, ResponseStatus};
use crate::upload::UploadError;

/// Failures that end an invocation.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{0}")]
    Configuration(#[from] ConfigurationError),
    #[error("{0}")]
    Generation(#[from] GenerationError),
    #[error("Missing required S3 bucket name in 's3_bucket'")]
    MissingBucket,
    #[error("{0}")]
    Upload(#[from] UploadError),
}

impl HandlerError {
    pub fn status(&self) -> ResponseStatus {
        match self {
            HandlerError::Configuration(_)
            | HandlerError::MissingBucket
            | HandlerError::Generation(GenerationError::UnknownDatasetType { .. }) => {
                ResponseStatus::BadRequest
            }
            HandlerError::Generation(_) | HandlerError::Upload(_) => ResponseStatus::ServerError,
        }
    }

    pub fn into_response(self) -> HandlerResponse {
        let message = match &self {
            HandlerError::Configuration(_)
            | HandlerError::Generation(GenerationError::UnknownDatasetType { .. }) => {
                format!("Invalid input JSON or configuration: {self}")
            }
            HandlerError::Generation(err) => format!("Error writing CSV artifact: {err}"),
            HandlerError::MissingBucket => self.to_string(),
            HandlerError::Upload(err) => format!("Error uploading to S3: {err}"),
        };
        HandlerResponse::new(self.status(), message)
    }
}
