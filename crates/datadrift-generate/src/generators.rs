use rand::RngCore;

use crate::datasets::DatasetDefinition;
use crate::value::Row;

/// Produces base rows for one dataset definition.
pub struct RowGenerator<'a> {
    definition: &'a DatasetDefinition,
}

impl<'a> RowGenerator<'a> {
    pub fn new(definition: &'a DatasetDefinition) -> Self {
        Self { definition }
    }

    pub fn generate(&self, index: u64, rng: &mut dyn RngCore) -> Row {
        self.definition.generate_row(index, rng)
    }

    /// Rows for indices `1..=count`, in index order.
    pub fn generate_all(&self, count: u64, rng: &mut dyn RngCore) -> Vec<Row> {
        (1..=count).map(|index| self.generate(index, rng)).collect()
    }
}
