//! Invocation surface for datadrift.
//!
//! Accepts a JSON payload, runs one generation to completion, writes the CSV
//! artifact locally and hands it to an object store.

pub mod errors;
pub mod handler;
pub mod request;
pub mod response;
pub mod upload;

pub use errors::HandlerError;
pub use handler::{Handler, HandlerOptions};
pub use request::{GenerationRequest, RawConfig};
pub use response::{HandlerResponse, ResponseStatus};
pub use upload::{LocalStore, ObjectStore, S3Store, UploadError};
