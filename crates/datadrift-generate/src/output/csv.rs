use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::drift::EffectiveSchema;
use crate::errors::GenerationError;
use crate::value::{GeneratedValue, Row};

/// Counts from a completed CSV write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvSummary {
    pub rows_written: u64,
    pub bytes_written: u64,
}

/// Look up every effective column against the row's canonical keys.
///
/// A renamed column has no canonical key to match, so it projects to
/// `None` just like a column the row never had.
pub fn project<'r>(row: &'r Row, schema: &EffectiveSchema) -> Vec<Option<&'r GeneratedValue>> {
    schema
        .columns()
        .iter()
        .map(|column| row.get(column))
        .collect()
}

/// Projected record as CSV fields; missing and null values become empty.
pub fn to_record(row: &Row, schema: &EffectiveSchema) -> Vec<String> {
    project(row, schema)
        .into_iter()
        .map(|value| value.map(GeneratedValue::to_csv).unwrap_or_default())
        .collect()
}

/// Write the header and one record per row.
pub fn write_csv<W: Write>(
    writer: W,
    schema: &EffectiveSchema,
    rows: &[Row],
) -> Result<CsvSummary, csv::Error> {
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(schema.columns())?;

    let mut rows_written = 0_u64;
    for row in rows {
        writer.write_record(to_record(row, schema))?;
        rows_written += 1;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(CsvSummary {
        rows_written,
        bytes_written: counting.bytes_written(),
    })
}

pub fn write_csv_file(
    path: &Path,
    schema: &EffectiveSchema,
    rows: &[Row],
) -> Result<CsvSummary, csv::Error> {
    let file = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    write_csv(file, schema, rows)
}

pub fn render_csv(schema: &EffectiveSchema, rows: &[Row]) -> Result<String, GenerationError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, schema, rows)?;
    String::from_utf8(buffer).map_err(|err| {
        GenerationError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Row {
        [
            ("Employee ID", GeneratedValue::text("EMP00001")),
            ("Full Name", GeneratedValue::text("Smith, Jane")),
            ("Salary", GeneratedValue::Null),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn renamed_columns_project_empty() {
        let schema = EffectiveSchema::canonical(&["Employee ID", "fullName", "Salary"]);
        assert_eq!(to_record(&row(), &schema), vec!["EMP00001", "", ""]);
    }

    #[test]
    fn fields_are_quoted_when_needed() {
        let schema = EffectiveSchema::canonical(&["Employee ID", "Full Name"]);
        let text = render_csv(&schema, &[row()]).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Employee ID,Full Name", "EMP00001,\"Smith, Jane\""]);
    }
}
