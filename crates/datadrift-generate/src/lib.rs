//! Messy synthetic dataset generation for datadrift.
//!
//! Rows come from a built-in dataset definition, then pass through null
//! injection, type corruption, duplication and shuffling before being
//! projected onto a (possibly drifted) column set and written as CSV.

pub mod datasets;
pub mod drift;
pub mod engine;
pub mod errors;
pub mod faker_rs;
pub mod generators;
pub mod model;
pub mod output;
pub mod transforms;
pub mod value;

pub use datasets::{DatasetDefinition, DatasetRegistry, lookup, registry};
pub use drift::{DriftRates, EffectiveSchema, SchemaDriftEngine};
pub use engine::{GeneratedDataset, GenerationEngine};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationResult};
pub use value::{GeneratedValue, Row};
