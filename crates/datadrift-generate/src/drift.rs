use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::datasets::{DatasetDefinition, find_aliases};

/// Probabilities used by the drift engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftRates {
    /// Chance that a field with aliases is renamed to one of them.
    pub rename: f64,
    /// Chance that a field without aliases is dropped.
    pub drop: f64,
}

impl Default for DriftRates {
    fn default() -> Self {
        Self {
            rename: 0.30,
            drop: 0.10,
        }
    }
}

/// Ordered output columns for one run. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveSchema {
    columns: Vec<String>,
}

impl EffectiveSchema {
    /// The canonical field list, verbatim.
    pub fn canonical(fields: &[&str]) -> Self {
        Self {
            columns: fields.iter().map(|field| field.to_string()).collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn into_columns(self) -> Vec<String> {
        self.columns
    }
}

/// Derives drifted column sets independent of row contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaDriftEngine {
    rates: DriftRates,
}

impl SchemaDriftEngine {
    pub fn new(rates: DriftRates) -> Self {
        Self { rates }
    }

    pub fn derive_for(
        &self,
        definition: &DatasetDefinition,
        rng: &mut dyn RngCore,
    ) -> EffectiveSchema {
        self.derive(
            definition.canonical_fields,
            |field| definition.aliases_for(field),
            rng,
        )
    }

    /// Walk canonical fields in order. Aliased fields may only be renamed;
    /// fields without aliases may only be dropped.
    pub fn derive_schema(
        &self,
        canonical_fields: &[&str],
        aliases_by_field: &[(&str, &[&str])],
        rng: &mut dyn RngCore,
    ) -> EffectiveSchema {
        self.derive(
            canonical_fields,
            |field| find_aliases(aliases_by_field, field),
            rng,
        )
    }

    fn derive<'a>(
        &self,
        canonical_fields: &[&str],
        aliases_for: impl Fn(&str) -> Option<&'a [&'a str]>,
        rng: &mut dyn RngCore,
    ) -> EffectiveSchema {
        let mut columns = Vec::with_capacity(canonical_fields.len());

        for &field in canonical_fields {
            match aliases_for(field) {
                Some(aliases) => {
                    if rng.random::<f64>() < self.rates.rename
                        && let Some(alias) = aliases.choose(rng)
                    {
                        debug!(field, alias, "column renamed");
                        columns.push(alias.to_string());
                    } else {
                        columns.push(field.to_string());
                    }
                }
                None => {
                    if rng.random::<f64>() < self.rates.drop {
                        debug!(field, "column dropped");
                    } else {
                        columns.push(field.to_string());
                    }
                }
            }
        }

        if columns.is_empty() {
            debug!("every column dropped, reverting to canonical fields");
            return EffectiveSchema::canonical(canonical_fields);
        }

        EffectiveSchema { columns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const FIELDS: &[&str] = &["id", "name", "amount"];
    const ALIASES: &[(&str, &[&str])] = &[("name", &["full_name", "fullName"])];

    #[test]
    fn forced_drop_reverts_to_canonical() {
        let engine = SchemaDriftEngine::new(DriftRates {
            rename: 0.0,
            drop: 1.0,
        });
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let schema = engine.derive_schema(FIELDS, &[], &mut rng);
        assert_eq!(schema, EffectiveSchema::canonical(FIELDS));
    }

    #[test]
    fn aliased_fields_are_never_dropped() {
        let engine = SchemaDriftEngine::new(DriftRates {
            rename: 0.0,
            drop: 1.0,
        });
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let schema = engine.derive_schema(FIELDS, ALIASES, &mut rng);
        assert_eq!(schema.columns(), &["name".to_string()]);
    }

    #[test]
    fn forced_rename_picks_an_alias() {
        let engine = SchemaDriftEngine::new(DriftRates {
            rename: 1.0,
            drop: 0.0,
        });
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let schema = engine.derive_schema(FIELDS, ALIASES, &mut rng);
            assert_eq!(schema.len(), 3);
            assert_eq!(schema.columns()[0], "id");
            assert!(["full_name", "fullName"].contains(&schema.columns()[1].as_str()));
            assert_eq!(schema.columns()[2], "amount");
        }
    }
}
