use thiserror::Error;

/// Raised for any failed column lookup, at load time or query time
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("column not found: {0}")]
    ColumnNotFound(String),
}

/// How a column's cells are typed during loading
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColumnKind {
    Text,
    Number,
}

/// A named, typed column
#[derive(Clone, Debug)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

/// Fixed ordered set of named, typed columns, validated once at load time
#[derive(Clone, Debug, Default)]
pub struct Schema {
    columns: Vec<Column>,
}

/// Normalize a header name: trim and collapse embedded whitespace runs
/// (including newlines) to single spaces
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Build a schema from raw header names. Names are normalized first;
    /// columns listed in `numeric` are typed `Number`, the rest `Text`.
    pub fn from_headers<'a>(headers: impl Iterator<Item = &'a str>, numeric: &[&str]) -> Self {
        let columns = headers
            .map(|raw| {
                let name = normalize_name(raw);
                let kind = if numeric.contains(&name.as_str()) {
                    ColumnKind::Number
                } else {
                    ColumnKind::Text
                };
                Column { name, kind }
            })
            .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column by exact (normalized) name
    pub fn index_of(&self, name: &str) -> Result<usize, SchemaError> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| SchemaError::ColumnNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_newlines() {
        assert_eq!(normalize_name(" Total\nFat (g) "), "Total Fat (g)");
        assert_eq!(normalize_name("Calories"), "Calories");
        assert_eq!(normalize_name("Calories\n from\n Fat"), "Calories from Fat");
    }

    #[test]
    fn test_from_headers_types_by_name() {
        let schema =
            Schema::from_headers(["Company", "Item", "Total\nFat (g)"].into_iter(), &["Total Fat (g)"]);
        assert_eq!(schema.columns()[0].kind, ColumnKind::Text);
        assert_eq!(schema.columns()[2].kind, ColumnKind::Number);
        assert_eq!(schema.columns()[2].name, "Total Fat (g)");
    }

    #[test]
    fn test_unknown_column_is_a_named_error() {
        let schema = Schema::from_headers(["Company"].into_iter(), &[]);
        assert_eq!(schema.index_of("Company"), Ok(0));
        assert_eq!(
            schema.index_of("Item"),
            Err(SchemaError::ColumnNotFound("Item".to_string()))
        );
    }
}
