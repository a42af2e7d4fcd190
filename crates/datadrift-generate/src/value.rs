use chrono::{NaiveDate, NaiveDateTime};

/// Generated value for a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl GeneratedValue {
    pub fn text(value: impl Into<String>) -> Self {
        GeneratedValue::Text(value.into())
    }

    /// ISO `YYYY-MM-DD` date carried as text.
    pub fn date(value: NaiveDate) -> Self {
        GeneratedValue::Text(value.format("%Y-%m-%d").to_string())
    }

    /// ISO `YYYY-MM-DDTHH:MM:SS` timestamp carried as text.
    pub fn timestamp(value: NaiveDateTime) -> Self {
        GeneratedValue::Text(value.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, GeneratedValue::Null)
    }

    pub fn to_csv(&self) -> String {
        match self {
            GeneratedValue::Null => String::new(),
            GeneratedValue::Int(value) => value.to_string(),
            GeneratedValue::Float(value) => format_float(*value),
            GeneratedValue::Text(value) => value.clone(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GeneratedValue::Int(value) => Some(*value as f64),
            GeneratedValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// Shortest round-trip representation; integral values keep a trailing `.0`.
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// One generated record keyed by canonical field name.
///
/// Fields keep the order in which they were inserted, which for generated
/// rows is the dataset's canonical field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, GeneratedValue)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: GeneratedValue) {
        let name = name.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&GeneratedValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeneratedValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Build a new row by passing every field through `f`.
    pub fn map_values<F>(self, mut f: F) -> Row
    where
        F: FnMut(&str, GeneratedValue) -> GeneratedValue,
    {
        let fields = self
            .fields
            .into_iter()
            .map(|(key, value)| {
                let value = f(&key, value);
                (key, value)
            })
            .collect();
        Row { fields }
    }
}

impl<K: Into<String>> FromIterator<(K, GeneratedValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, GeneratedValue)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}
