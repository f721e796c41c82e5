use crate::table::schema::{Column, ColumnKind, Schema, SchemaError};

/// A single cell. Empty cells and failed numeric parses load as `Missing`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Missing,
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

pub type Row = Vec<Value>;

/// An ordered, immutable table of rows under one schema.
/// Loaded once per source; never mutated after construction.
#[derive(Debug)]
pub struct Dataset {
    schema: Schema,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(schema: Schema, rows: Vec<Row>) -> Self {
        Self { schema, rows }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell lookup by row position and column name
    pub fn value(&self, row: usize, col: &str) -> Result<&Value, SchemaError> {
        let idx = self.schema.index_of(col)?;
        Ok(self.rows.get(row).and_then(|r| r.get(idx)).unwrap_or(&Value::Missing))
    }

    /// Sorted, deduplicated text values of a column, skipping missing cells.
    /// Used to enumerate selector choices.
    pub fn unique_text(&self, col: &str) -> Result<Vec<String>, SchemaError> {
        let idx = self.schema.index_of(col)?;
        let mut values: Vec<String> = self
            .rows
            .iter()
            .filter_map(|r| r.get(idx).and_then(Value::as_text))
            .map(str::to_string)
            .collect();
        values.sort();
        values.dedup();
        Ok(values)
    }

    /// Reshape wide to long: one output row per (input row, non-id column),
    /// in row-major order. The long schema is `[id_col, var_name, value_name]`
    /// where the value column is numeric (non-numeric cells become missing).
    pub fn melt(&self, id_col: &str, var_name: &str, value_name: &str) -> Result<Dataset, SchemaError> {
        let id_idx = self.schema.index_of(id_col)?;

        let long_schema = Schema::new(vec![
            Column { name: id_col.to_string(), kind: ColumnKind::Text },
            Column { name: var_name.to_string(), kind: ColumnKind::Text },
            Column { name: value_name.to_string(), kind: ColumnKind::Number },
        ]);

        let mut rows = Vec::with_capacity(self.rows.len() * self.schema.len().saturating_sub(1));
        for row in &self.rows {
            let id_value = row.get(id_idx).cloned().unwrap_or(Value::Missing);
            for (col_idx, col) in self.schema.columns().iter().enumerate() {
                if col_idx == id_idx {
                    continue;
                }
                let value = match row.get(col_idx).and_then(Value::as_number) {
                    Some(n) => Value::Number(n),
                    None => Value::Missing,
                };
                rows.push(vec![
                    id_value.clone(),
                    Value::Text(col.name.clone()),
                    value,
                ]);
            }
        }

        Ok(Dataset::new(long_schema, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide() -> Dataset {
        let schema = Schema::from_headers(["Country", "INTJ", "ENFP"].into_iter(), &["INTJ", "ENFP"]);
        Dataset::new(
            schema,
            vec![
                vec![
                    Value::Text("Korea".into()),
                    Value::Number(0.04),
                    Value::Number(0.12),
                ],
                vec![
                    Value::Text("Japan".into()),
                    Value::Number(0.05),
                    Value::Missing,
                ],
            ],
        )
    }

    #[test]
    fn test_melt_row_major_order() {
        let long = wide().melt("Country", "Type", "Share").unwrap();
        assert_eq!(long.len(), 4);
        assert_eq!(long.value(0, "Country").unwrap().as_text(), Some("Korea"));
        assert_eq!(long.value(0, "Type").unwrap().as_text(), Some("INTJ"));
        assert_eq!(long.value(0, "Share").unwrap().as_number(), Some(0.04));
        assert_eq!(long.value(1, "Type").unwrap().as_text(), Some("ENFP"));
        // missing values survive the reshape as missing
        assert!(long.value(3, "Share").unwrap().is_missing());
    }

    #[test]
    fn test_unique_text_sorted() {
        let data = wide();
        assert_eq!(data.unique_text("Country").unwrap(), vec!["Japan", "Korea"]);
    }

    #[test]
    fn test_melt_unknown_id_column() {
        assert!(wide().melt("Nation", "Type", "Share").is_err());
    }
}
