//! Built-in dataset definitions.
//!
//! A definition is plain data: canonical fields, per-field drift aliases,
//! protected identifier fields and a row rule. Adding a dataset type means
//! adding one module and registering its definition below.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use rand::RngCore;
use rand::seq::IndexedRandom;

use crate::errors::GenerationError;
use crate::value::Row;

pub mod employee;
pub mod healthcare;
pub mod person;
pub mod product;
pub mod transaction;
pub mod user;

/// Builds the base row for a one-based row index.
pub type RowRule = fn(u64, &mut dyn RngCore) -> Row;

#[derive(Debug, Clone, Copy)]
pub struct DatasetDefinition {
    pub name: &'static str,
    pub canonical_fields: &'static [&'static str],
    pub aliases: &'static [(&'static str, &'static [&'static str])],
    /// Identifier fields never touched by null injection.
    pub protected_fields: &'static [&'static str],
    pub row_rule: RowRule,
}

impl DatasetDefinition {
    /// Alias list for a canonical field, if it has a non-empty one.
    pub fn aliases_for(&self, field: &str) -> Option<&'static [&'static str]> {
        find_aliases(self.aliases, field)
    }

    pub fn is_protected(&self, field: &str) -> bool {
        self.protected_fields.contains(&field)
    }

    pub fn generate_row(&self, index: u64, rng: &mut dyn RngCore) -> Row {
        (self.row_rule)(index, rng)
    }
}

/// Read-only lookup from dataset identifier to definition.
#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    definitions: BTreeMap<&'static str, DatasetDefinition>,
}

impl DatasetRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            definitions: BTreeMap::new(),
        };
        employee::register(&mut registry);
        transaction::register(&mut registry);
        product::register(&mut registry);
        user::register(&mut registry);
        healthcare::register(&mut registry);
        person::register(&mut registry);
        registry
    }

    pub fn register(&mut self, definition: DatasetDefinition) {
        self.definitions.insert(definition.name, definition);
    }

    pub fn lookup(&self, dataset_type: &str) -> Result<&DatasetDefinition, GenerationError> {
        self.definitions
            .get(dataset_type)
            .ok_or_else(|| GenerationError::UnknownDatasetType {
                requested: dataset_type.to_string(),
                known: self.ids().join(", "),
            })
    }

    /// Registered identifiers in sorted order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.definitions.keys().copied().collect()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &DatasetDefinition> {
        self.definitions.values()
    }
}

impl Default for DatasetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide registry, built on first use.
pub fn registry() -> &'static DatasetRegistry {
    static REGISTRY: OnceLock<DatasetRegistry> = OnceLock::new();
    REGISTRY.get_or_init(DatasetRegistry::new)
}

pub fn lookup(dataset_type: &str) -> Result<&'static DatasetDefinition, GenerationError> {
    registry().lookup(dataset_type)
}

/// Non-empty alias list for `field` in an alias table.
pub(crate) fn find_aliases<'t>(
    table: &[(&str, &'t [&'t str])],
    field: &str,
) -> Option<&'t [&'t str]> {
    table
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, aliases)| *aliases)
        .filter(|aliases| !aliases.is_empty())
}

fn pick(values: &[&'static str], rng: &mut dyn RngCore) -> &'static str {
    values.choose(rng).copied().unwrap_or_default()
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
