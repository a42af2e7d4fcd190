//! Object-store collaborators for finished artifacts.

use std::fs;
use std::path::{Component, Path, PathBuf};

use aws_config::BehaviorVersion;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use thiserror::Error;
use tokio::runtime::Runtime;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("client setup failed: {0}")]
    Setup(String),
    #[error("invalid object key '{0}'")]
    InvalidKey(String),
    #[error("{0}")]
    Request(String),
}

/// Single request/response upload of a local file.
pub trait ObjectStore {
    /// Upload `path` to `bucket`/`key`, returning the destination location.
    fn upload(&self, path: &Path, bucket: &str, key: &str) -> Result<String, UploadError>;
}

impl<T: ObjectStore + ?Sized> ObjectStore for Box<T> {
    fn upload(&self, path: &Path, bucket: &str, key: &str) -> Result<String, UploadError> {
        (**self).upload(path, bucket, key)
    }
}

impl<T: ObjectStore + ?Sized> ObjectStore for &T {
    fn upload(&self, path: &Path, bucket: &str, key: &str) -> Result<String, UploadError> {
        (**self).upload(path, bucket, key)
    }
}

/// Amazon S3 store using the default credential chain.
///
/// Owns a current-thread runtime so uploads block the caller.
pub struct S3Store {
    runtime: Runtime,
    client: aws_sdk_s3::Client,
}

impl S3Store {
    pub fn from_env() -> Result<Self, UploadError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| UploadError::Setup(err.to_string()))?;
        let sdk_config = runtime.block_on(aws_config::load_defaults(BehaviorVersion::latest()));
        let client = aws_sdk_s3::Client::new(&sdk_config);
        Ok(Self { runtime, client })
    }
}

impl ObjectStore for S3Store {
    fn upload(&self, path: &Path, bucket: &str, key: &str) -> Result<String, UploadError> {
        self.runtime.block_on(async {
            let body = ByteStream::from_path(path)
                .await
                .map_err(|err| UploadError::Request(err.to_string()))?;
            self.client
                .put_object()
                .bucket(bucket)
                .key(key)
                .body(body)
                .send()
                .await
                .map_err(|err| UploadError::Request(DisplayErrorContext(&err).to_string()))?;

            tracing::debug!(bucket, key, "object stored");
            Ok(format!("s3://{bucket}/{key}"))
        })
    }
}

/// Filesystem store laying objects out as `root/bucket/key`.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ObjectStore for LocalStore {
    fn upload(&self, path: &Path, bucket: &str, key: &str) -> Result<String, UploadError> {
        let bucket_path = relative_path(bucket)?;
        let key_path = relative_path(key)?;
        let destination = self.root.join(bucket_path).join(key_path);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &destination)?;
        Ok(destination.display().to_string())
    }
}

fn relative_path(value: &str) -> Result<&Path, UploadError> {
    let path = Path::new(value);
    let normal = path
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    if value.is_empty() || !normal {
        return Err(UploadError::InvalidKey(value.to_string()));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_escaping_keys() {
        for key in ["", "../x.csv", "/abs/x.csv", "a/../../b"] {
            assert!(matches!(relative_path(key), Err(UploadError::InvalidKey(_))), "{key}");
        }
        assert!(relative_path("reports/2024/x.csv").is_ok());
    }
}
