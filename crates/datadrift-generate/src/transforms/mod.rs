use rand::RngCore;

use crate::value::Row;

pub mod duplicates;
pub mod nulls;
pub mod types;

pub use duplicates::Duplicator;
pub use nulls::NullCorruptor;
pub use types::TypeCorruptor;

/// Per-row corruption step. Each application yields a new row.
pub trait RowTransform {
    fn id(&self) -> &'static str;

    fn apply(&self, row: Row, rng: &mut dyn RngCore) -> Row;
}
