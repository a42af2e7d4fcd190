use rand::{Rng, RngCore};

use crate::transforms::RowTransform;
use crate::value::{GeneratedValue, Row, format_float};

/// Per-field probability of a type flip.
pub const TYPE_ERROR_RATE: f64 = 0.10;

/// Flips value representations between numeric and textual forms.
#[derive(Debug, Clone, Copy)]
pub struct TypeCorruptor {
    rate: f64,
}

impl TypeCorruptor {
    pub fn new() -> Self {
        Self::with_rate(TYPE_ERROR_RATE)
    }

    pub fn with_rate(rate: f64) -> Self {
        Self { rate }
    }
}

impl Default for TypeCorruptor {
    fn default() -> Self {
        Self::new()
    }
}

impl RowTransform for TypeCorruptor {
    fn id(&self) -> &'static str {
        "transform.type_error"
    }

    fn apply(&self, row: Row, rng: &mut dyn RngCore) -> Row {
        row.map_values(|_, value| {
            if rng.random::<f64>() < self.rate {
                corrupt_value(value)
            } else {
                value
            }
        })
    }
}

/// Integer to two-digit zero-padded text, float to text, digit-only text to
/// integer. Anything else is returned as is.
pub fn corrupt_value(value: GeneratedValue) -> GeneratedValue {
    match value {
        GeneratedValue::Int(value) => GeneratedValue::Text(format!("{value:02}")),
        GeneratedValue::Float(value) => GeneratedValue::Text(format_float(value)),
        GeneratedValue::Text(text) if is_decimal_digits(&text) => match text.parse::<i64>() {
            Ok(value) => GeneratedValue::Int(value),
            Err(_) => GeneratedValue::Text(text),
        },
        other => other,
    }
}

fn is_decimal_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn corrupts_across_type_classes() {
        assert_eq!(corrupt_value(GeneratedValue::Int(7)), GeneratedValue::text("07"));
        assert_eq!(corrupt_value(GeneratedValue::Int(123)), GeneratedValue::text("123"));
        assert_eq!(
            corrupt_value(GeneratedValue::Float(52000.0)),
            GeneratedValue::text("52000.0")
        );
        assert_eq!(corrupt_value(GeneratedValue::text("0042")), GeneratedValue::Int(42));
        assert_eq!(
            corrupt_value(GeneratedValue::text("EMP00001")),
            GeneratedValue::text("EMP00001")
        );
        assert_eq!(corrupt_value(GeneratedValue::Null), GeneratedValue::Null);
        assert_eq!(corrupt_value(GeneratedValue::text("")), GeneratedValue::text(""));
    }

    #[test]
    fn zero_rate_never_changes_values() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let row: Row = [("Age", GeneratedValue::Int(30)), ("Code", GeneratedValue::text("12"))]
            .into_iter()
            .collect();
        for _ in 0..100 {
            assert_eq!(TypeCorruptor::with_rate(0.0).apply(row.clone(), &mut rng), row);
        }
    }

    #[test]
    fn full_rate_flips_every_field() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let row: Row = [("Age", GeneratedValue::Int(30)), ("Code", GeneratedValue::text("12"))]
            .into_iter()
            .collect();
        let corrupted = TypeCorruptor::with_rate(1.0).apply(row, &mut rng);
        assert_eq!(corrupted.get("Age"), Some(&GeneratedValue::text("30")));
        assert_eq!(corrupted.get("Code"), Some(&GeneratedValue::Int(12)));
    }
}
