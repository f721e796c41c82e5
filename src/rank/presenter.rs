use crate::table::{Dataset, Row, Schema, SchemaError, Value};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    /// The selection matched no rows with a usable metric value.
    /// Recoverable: the caller shows a "no data" message and the user
    /// picks something else.
    #[error("no data for this selection")]
    EmptyResult,
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Top-N rows of one group, sorted descending by the metric column.
/// Owns cloned rows so it outlives the query that produced it.
pub struct RankedSubset {
    schema: Schema,
    rows: Vec<Row>,
    metric_idx: usize,
}

impl RankedSubset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Metric value at a position. Always numeric by construction.
    pub fn metric(&self, row: usize) -> f64 {
        self.rows[row][self.metric_idx].as_number().unwrap_or(0.0)
    }

    pub fn text(&self, row: usize, col: &str) -> Option<&str> {
        let idx = self.schema.index_of(col).ok()?;
        self.rows.get(row)?.get(idx)?.as_text()
    }

    pub fn number(&self, row: usize, col: &str) -> Option<f64> {
        let idx = self.schema.index_of(col).ok()?;
        self.rows.get(row)?.get(idx)?.as_number()
    }
}

/// Filter `data` to rows whose `group_col` text equals `group_value`, drop
/// rows with a missing or non-numeric metric, sort descending by
/// `metric_col` (stable: ties keep input order), and keep the first `n`.
///
/// Pure function of its inputs. Signals `EmptyResult` when the filtered
/// group has no usable rows; column lookups fail with the schema's named
/// condition.
pub fn select_top_n(
    data: &Dataset,
    group_col: &str,
    group_value: &str,
    metric_col: &str,
    n: usize,
) -> Result<RankedSubset, RankError> {
    let group_idx = data.schema().index_of(group_col)?;
    let metric_idx = data.schema().index_of(metric_col)?;

    let mut matched: Vec<(&Row, f64)> = data
        .rows()
        .iter()
        .filter(|row| {
            row.get(group_idx)
                .and_then(Value::as_text)
                .is_some_and(|v| v == group_value)
        })
        .filter_map(|row| {
            let metric = row.get(metric_idx).and_then(Value::as_number)?;
            metric.is_finite().then_some((row, metric))
        })
        .collect();

    if matched.is_empty() {
        return Err(RankError::EmptyResult);
    }

    // Vec::sort_by is stable, so equal metrics keep their input order
    matched.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    matched.truncate(n);

    Ok(RankedSubset {
        schema: data.schema().clone(),
        rows: matched.into_iter().map(|(row, _)| row.clone()).collect(),
        metric_idx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::from_reader;

    fn menu() -> Dataset {
        let csv_text = "Company,Item,Fat\n\
                        A,X,10\n\
                        A,Y,30\n\
                        A,Z,30\n\
                        B,W,99\n\
                        A,V,not-a-number\n\
                        A,U,\n";
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(csv_text.as_bytes());
        from_reader(reader, &["Fat"], &["Company", "Item"]).unwrap()
    }

    #[test]
    fn test_tie_keeps_input_order() {
        let top = select_top_n(&menu(), "Company", "A", "Fat", 2).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top.text(0, "Item"), Some("Y"));
        assert_eq!(top.text(1, "Item"), Some("Z"));
        assert_eq!(top.metric(0), 30.0);
        assert_eq!(top.metric(1), 30.0);
    }

    #[test]
    fn test_len_is_min_of_n_and_eligible_rows() {
        // group A has 3 eligible rows; V and U are excluded by coercion
        let top = select_top_n(&menu(), "Company", "A", "Fat", 50).unwrap();
        assert_eq!(top.len(), 3);
        let top = select_top_n(&menu(), "Company", "A", "Fat", 1).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top.text(0, "Item"), Some("Y"));
    }

    #[test]
    fn test_sorted_non_increasing() {
        let top = select_top_n(&menu(), "Company", "A", "Fat", 10).unwrap();
        for i in 1..top.len() {
            assert!(top.metric(i - 1) >= top.metric(i));
        }
    }

    #[test]
    fn test_empty_group_signals_empty_result() {
        assert!(matches!(
            select_top_n(&menu(), "Company", "C", "Fat", 5),
            Err(RankError::EmptyResult)
        ));
    }

    #[test]
    fn test_group_with_only_unusable_metrics_is_empty() {
        let csv_text = "Company,Item,Fat\nA,V,n/a\nA,U,\n";
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(csv_text.as_bytes());
        let data = from_reader(reader, &["Fat"], &[]).unwrap();
        assert!(matches!(
            select_top_n(&data, "Company", "A", "Fat", 5),
            Err(RankError::EmptyResult)
        ));
    }

    #[test]
    fn test_unknown_columns_propagate_schema_error() {
        assert!(matches!(
            select_top_n(&menu(), "Brand", "A", "Fat", 5),
            Err(RankError::Schema(SchemaError::ColumnNotFound(_)))
        ));
        assert!(matches!(
            select_top_n(&menu(), "Company", "A", "Grease", 5),
            Err(RankError::Schema(SchemaError::ColumnNotFound(_)))
        ));
    }
}
