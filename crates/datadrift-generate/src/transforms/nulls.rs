use rand::{Rng, RngCore};

use crate::transforms::RowTransform;
use crate::value::{GeneratedValue, Row};

/// Nulls out unprotected fields with a fixed per-field probability.
pub struct NullCorruptor<'a> {
    probability: f64,
    protected_fields: &'a [&'a str],
}

impl<'a> NullCorruptor<'a> {
    pub fn new(probability: f64, protected_fields: &'a [&'a str]) -> Self {
        Self {
            probability,
            protected_fields,
        }
    }
}

impl RowTransform for NullCorruptor<'_> {
    fn id(&self) -> &'static str {
        "transform.null"
    }

    fn apply(&self, row: Row, rng: &mut dyn RngCore) -> Row {
        if self.probability <= 0.0 {
            return row;
        }
        row.map_values(|name, value| {
            if self.protected_fields.contains(&name) {
                return value;
            }
            // A draw equal to the probability still nulls the field.
            if rng.random::<f64>() <= self.probability {
                GeneratedValue::Null
            } else {
                value
            }
        })
    }
}
