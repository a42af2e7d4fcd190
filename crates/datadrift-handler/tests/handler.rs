use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use uuid::Uuid;

use datadrift_handler::{
    Handler, HandlerOptions, LocalStore, ObjectStore, ResponseStatus, UploadError,
};

fn temp_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("datadrift_{label}_{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn options(work_dir: &Path) -> HandlerOptions {
    HandlerOptions {
        work_dir: work_dir.to_path_buf(),
    }
}

#[derive(Default)]
struct RecordingStore {
    calls: RefCell<Vec<(PathBuf, String, String)>>,
}

impl ObjectStore for RecordingStore {
    fn upload(&self, path: &Path, bucket: &str, key: &str) -> Result<String, UploadError> {
        self.calls
            .borrow_mut()
            .push((path.to_path_buf(), bucket.to_string(), key.to_string()));
        Ok(format!("s3://{bucket}/{key}"))
    }
}

struct FailingStore;

impl ObjectStore for FailingStore {
    fn upload(&self, _path: &Path, _bucket: &str, _key: &str) -> Result<String, UploadError> {
        Err(UploadError::Request("access denied".to_string()))
    }
}

#[test]
fn unknown_dataset_type_is_bad_request_without_artifact() {
    let work_dir = temp_dir("unknown_type");
    let store = RecordingStore::default();
    let handler = Handler::new(&store, options(&work_dir));

    let response = handler.handle(json!({
        "dataset_type": "bogus",
        "filename": "bogus.csv",
        "s3_bucket": "b"
    }));

    assert_eq!(response.status, ResponseStatus::BadRequest);
    assert_eq!(response.status_code, 400);
    assert!(response.message.starts_with("Invalid input JSON or configuration"));
    assert!(response.message.contains("bogus"));
    assert!(!work_dir.join("bogus.csv").exists());
    assert!(store.calls.borrow().is_empty());
}

#[test]
fn invalid_configuration_is_bad_request() {
    let work_dir = temp_dir("invalid_config");
    let handler = Handler::new(RecordingStore::default(), options(&work_dir));

    for config in [
        json!({ "num_rows": 0 }),
        json!({ "num_rows": 5, "num_duplicates": 6 }),
        json!({ "null_probability": 1.5 }),
        json!({ "num_rows": "ten" }),
    ] {
        let response = handler.handle(json!({ "config": config, "s3_bucket": "b" }));
        assert_eq!(response.status, ResponseStatus::BadRequest, "{config}");
    }
}

#[test]
fn missing_bucket_keeps_artifact_and_skips_upload() {
    let work_dir = temp_dir("missing_bucket");
    let store = RecordingStore::default();
    let handler = Handler::new(&store, options(&work_dir));

    let response = handler.handle(json!({
        "filename": "x.csv",
        "config": { "num_rows": 5, "null_probability": 0.0 }
    }));

    assert_eq!(response.status, ResponseStatus::BadRequest);
    assert_eq!(
        response.message,
        "Missing required S3 bucket name in 's3_bucket'"
    );
    let artifact = fs::read_to_string(work_dir.join("x.csv")).expect("artifact");
    assert_eq!(artifact.lines().count(), 6);
    assert!(store.calls.borrow().is_empty());
}

#[test]
fn empty_bucket_counts_as_missing() {
    let work_dir = temp_dir("empty_bucket");
    let handler = Handler::new(RecordingStore::default(), options(&work_dir));

    let response = handler.handle(json!({ "s3_bucket": "", "config": { "num_rows": 1 } }));
    assert_eq!(response.status, ResponseStatus::BadRequest);
}

#[test]
fn key_defaults_to_artifact_name() {
    let work_dir = temp_dir("default_key");
    let store = RecordingStore::default();
    let handler = Handler::new(&store, options(&work_dir));

    let response = handler.handle(json!({
        "filename": "nested/dir/out.csv",
        "s3_bucket": "reports",
        "config": { "num_rows": 3 }
    }));
    assert!(response.is_ok(), "{}", response.message);
    assert_eq!(response.message, "CSV file uploaded to s3://reports/out.csv");

    let calls = store.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, work_dir.join("out.csv"));
    assert_eq!(calls[0].1, "reports");
    assert_eq!(calls[0].2, "out.csv");
}

#[test]
fn explicit_key_overrides_artifact_name() {
    let work_dir = temp_dir("explicit_key");
    let store = RecordingStore::default();
    let handler = Handler::new(&store, options(&work_dir));

    let response = handler.handle(json!({
        "dataset_type": "transaction",
        "filename": "t.csv",
        "s3_bucket": "reports",
        "s3_key": "daily/t.csv",
        "config": { "num_rows": 2 }
    }));
    assert!(response.is_ok(), "{}", response.message);
    assert_eq!(store.calls.borrow()[0].2, "daily/t.csv");
}

#[test]
fn local_store_receives_artifact() {
    let work_dir = temp_dir("local_work");
    let store_root = temp_dir("local_store");
    let handler = Handler::new(LocalStore::new(&store_root), options(&work_dir));

    let response = handler.handle(json!({
        "filename": "employees.csv",
        "s3_bucket": "bucket",
        "config": { "num_rows": 10, "num_duplicates": 2, "null_probability": 0.0 }
    }));
    assert!(response.is_ok(), "{}", response.message);

    let stored = store_root.join("bucket").join("employees.csv");
    let contents = fs::read_to_string(&stored).expect("stored object");
    assert_eq!(contents.lines().count(), 13);
    assert_eq!(
        contents.lines().next(),
        Some("Employee ID,Full Name,Department,Salary,Hire Date,Email")
    );
}

#[test]
fn upload_failure_is_server_error() {
    let work_dir = temp_dir("upload_failure");
    let handler = Handler::new(FailingStore, options(&work_dir));

    let response = handler.handle(json!({ "s3_bucket": "b", "config": { "num_rows": 1 } }));
    assert_eq!(response.status, ResponseStatus::ServerError);
    assert_eq!(response.status_code, 500);
    assert_eq!(response.message, "Error uploading to S3: access denied");
}

#[test]
fn malformed_json_is_bad_request() {
    let work_dir = temp_dir("malformed");
    let handler = Handler::new(RecordingStore::default(), options(&work_dir));

    let response = handler.handle_str("{ not json");
    assert_eq!(response.status, ResponseStatus::BadRequest);
    assert!(response.message.starts_with("Invalid input JSON or configuration"));
}

#[test]
fn response_serializes_status_text() {
    let work_dir = temp_dir("serialize");
    let handler = Handler::new(RecordingStore::default(), options(&work_dir));

    let response = handler.handle_str(r#"{"dataset_type": "nope"}"#);
    let value = serde_json::to_value(&response).expect("serialize");
    assert_eq!(value["status"], "bad request");
    assert_eq!(value["status_code"], 400);
}
