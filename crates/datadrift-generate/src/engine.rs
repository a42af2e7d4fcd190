use std::path::Path;
use std::time::Instant;

use rand::RngCore;
use tracing::{debug, info};

use datadrift_core::Configuration;

use crate::datasets::DatasetDefinition;
use crate::drift::{EffectiveSchema, SchemaDriftEngine};
use crate::errors::GenerationError;
use crate::generators::RowGenerator;
use crate::model::{GenerateOptions, GenerationResult};
use crate::output::csv::{render_csv, write_csv_file};
use crate::transforms::{Duplicator, NullCorruptor, RowTransform, TypeCorruptor};
use crate::value::Row;

/// Rows and output columns of one in-memory generation run.
#[derive(Debug, Clone)]
pub struct GeneratedDataset {
    pub schema: EffectiveSchema,
    pub rows: Vec<Row>,
}

impl GeneratedDataset {
    pub fn to_csv_string(&self) -> Result<String, GenerationError> {
        render_csv(&self.schema, &self.rows)
    }
}

/// Sequences row generation, corruption, duplication and drift.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn generate(
        &self,
        definition: &DatasetDefinition,
        config: &Configuration,
        rng: &mut dyn RngCore,
    ) -> GeneratedDataset {
        info!(
            dataset = definition.name,
            rows = config.row_count(),
            duplicates = config.duplicate_count(),
            null_probability = config.null_probability(),
            schema_drift = self.options.schema_drift,
            data_errors = self.options.data_errors,
            "generation started"
        );

        let transforms = self.transforms(definition, config);
        let generator = RowGenerator::new(definition);
        let rows: Vec<Row> = (1..=config.row_count())
            .map(|index| {
                let row = generator.generate(index, rng);
                transforms
                    .iter()
                    .fold(row, |row, transform| transform.apply(row, rng))
            })
            .collect();

        let rows = Duplicator::new(config.duplicate_count()).apply(rows, rng);

        let schema = if self.options.schema_drift {
            SchemaDriftEngine::new(self.options.drift_rates).derive_for(definition, rng)
        } else {
            EffectiveSchema::canonical(definition.canonical_fields)
        };

        debug!(
            dataset = definition.name,
            columns = ?schema.columns(),
            "effective schema derived"
        );

        GeneratedDataset { schema, rows }
    }

    /// Generate and write the dataset as CSV to `path`.
    pub fn run(
        &self,
        definition: &DatasetDefinition,
        config: &Configuration,
        path: &Path,
        rng: &mut dyn RngCore,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let dataset = self.generate(definition, config, rng);
        let summary = write_csv_file(path, &dataset.schema, &dataset.rows)?;

        info!(
            dataset = definition.name,
            path = %path.display(),
            rows_written = summary.rows_written,
            bytes_written = summary.bytes_written,
            duration_ms = start.elapsed().as_millis() as u64,
            "csv written"
        );

        Ok(GenerationResult {
            path: path.to_path_buf(),
            columns: dataset.schema.into_columns(),
            rows_written: summary.rows_written,
            bytes_written: summary.bytes_written,
        })
    }

    fn transforms<'a>(
        &self,
        definition: &'a DatasetDefinition,
        config: &Configuration,
    ) -> Vec<Box<dyn RowTransform + 'a>> {
        let mut transforms: Vec<Box<dyn RowTransform + 'a>> = Vec::new();
        if config.null_probability() > 0.0 {
            transforms.push(Box::new(NullCorruptor::new(
                config.null_probability(),
                definition.protected_fields,
            )));
        }
        if self.options.data_errors {
            transforms.push(Box::new(TypeCorruptor::with_rate(
                self.options.type_error_rate,
            )));
        }
        for transform in &transforms {
            debug!(dataset = definition.name, transform = transform.id(), "transform enabled");
        }
        transforms
    }
}
