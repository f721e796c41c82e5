use crate::table::dataset::{Dataset, Value};
use crate::table::schema::{ColumnKind, Schema, SchemaError};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source file not found: {path}")]
    SourceNotFound { path: PathBuf },
    #[error("malformed source: {0}")]
    Parse(#[from] csv::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Load a CSV with a header row into a typed dataset.
///
/// Columns named in `numeric` parse as numbers; everything else loads as
/// text. Every name in `required` must be present after header
/// normalization. A path that does not resolve is reported as
/// `SourceNotFound` rather than an opaque io error.
pub fn load(path: &Path, numeric: &[&str], required: &[&str]) -> Result<Dataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::SourceNotFound { path: path.to_path_buf() });
    }
    let reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    from_reader(reader, numeric, required)
}

/// Reader-based core of `load`, also the seam the tests go through
pub fn from_reader<R: io::Read>(
    mut reader: csv::Reader<R>,
    numeric: &[&str],
    required: &[&str],
) -> Result<Dataset, LoadError> {
    let headers = reader.headers()?.clone();
    let schema = Schema::from_headers(headers.iter(), numeric);
    for name in required {
        schema.index_of(name)?;
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = schema
            .columns()
            .iter()
            .enumerate()
            .map(|(i, col)| parse_cell(record.get(i).unwrap_or(""), col.kind))
            .collect();
        rows.push(row);
    }

    Ok(Dataset::new(schema, rows))
}

/// Lenient cell coercion: numeric columns that fail to parse load as
/// `Missing` instead of erroring, and empty cells are always `Missing`
fn parse_cell(raw: &str, kind: ColumnKind) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Missing;
    }
    match kind {
        ColumnKind::Text => Value::Text(trimmed.to_string()),
        ColumnKind::Number => match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            _ => Value::Missing,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(csv_text: &str, numeric: &[&str], required: &[&str]) -> Result<Dataset, LoadError> {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(csv_text.as_bytes());
        from_reader(reader, numeric, required)
    }

    #[test]
    fn test_lenient_numeric_coercion() {
        let data = read(
            "Company,Item,Total Fat (g)\nMcD,Fries,24\nMcD,Shake,n/a\nMcD,Water,\n",
            &["Total Fat (g)"],
            &["Company", "Item"],
        )
        .unwrap();
        assert_eq!(data.value(0, "Total Fat (g)").unwrap().as_number(), Some(24.0));
        assert!(data.value(1, "Total Fat (g)").unwrap().is_missing());
        assert!(data.value(2, "Total Fat (g)").unwrap().is_missing());
    }

    #[test]
    fn test_header_normalization_before_lookup() {
        let data = read(
            "Company,\"Total\nFat (g)\"\nMcD,10\n",
            &["Total Fat (g)"],
            &["Total Fat (g)"],
        )
        .unwrap();
        assert_eq!(data.value(0, "Total Fat (g)").unwrap().as_number(), Some(10.0));
    }

    #[test]
    fn test_missing_required_column() {
        let err = read("Company,Item\nMcD,Fries\n", &[], &["Company", "Total Fat (g)"]).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Schema(SchemaError::ColumnNotFound(ref name)) if name == "Total Fat (g)"
        ));
    }

    #[test]
    fn test_short_record_pads_with_missing() {
        let data = read("Company,Item,Calories\nMcD,Fries\n", &["Calories"], &[]).unwrap();
        assert!(data.value(0, "Calories").unwrap().is_missing());
    }

    #[test]
    fn test_missing_file_is_source_not_found() {
        let err = load(Path::new("data/no_such_file.csv"), &[], &[]).unwrap_err();
        assert!(matches!(err, LoadError::SourceNotFound { .. }));
    }
}
