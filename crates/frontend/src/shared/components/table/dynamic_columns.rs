//! Column inference for schema-less tables
//!
//! Columns come from the keys of the FIRST record only. Keys that appear
//! only in later records are not shown; a later record missing a column
//! produces a missing cell (`None`).

use serde_json::{Map, Value};

/// Ordered column list taken from the first record's keys
pub fn derive_columns(records: &[Map<String, Value>]) -> Vec<String> {
    records
        .first()
        .map(|first| first.keys().cloned().collect())
        .unwrap_or_default()
}

/// Text representation of a cell value
///
/// Strings are shown verbatim, everything else as its JSON text
/// (`42`, `true`, `null`). Integral floats drop the fraction: `5.0` -> `5`.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .map(|f| f.to_string())
            .unwrap_or_else(|| n.to_string()),
        other => other.to_string(),
    }
}

/// Cells of one record, aligned to `columns`
pub fn row_cells(record: &Map<String, Value>, columns: &[String]) -> Vec<Option<String>> {
    columns
        .iter()
        .map(|column| record.get(column).map(cell_text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("record must be an object"),
        }
    }

    #[test]
    fn test_derive_columns_from_first_record() {
        let records = vec![
            record(json!({"id": "i-1", "state": "running"})),
            record(json!({"id": "i-2", "state": "stopped", "extra": 1})),
        ];
        assert_eq!(derive_columns(&records), vec!["id", "state"]);
    }

    #[test]
    fn test_derive_columns_keeps_key_order() {
        let records = vec![record(json!({"zeta": 1, "alpha": 2, "mid": 3}))];
        assert_eq!(derive_columns(&records), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_derive_columns_empty() {
        assert!(derive_columns(&[]).is_empty());
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&json!("running")), "running");
        assert_eq!(cell_text(&json!(20)), "20");
        assert_eq!(cell_text(&json!(1.5)), "1.5");
        assert_eq!(cell_text(&json!(false)), "false");
        assert_eq!(cell_text(&Value::Null), "null");
    }

    #[test]
    fn test_cell_text_integral_float() {
        assert_eq!(cell_text(&json!(5.0)), "5");
        assert_eq!(cell_text(&json!(-20.0)), "-20");
        assert_eq!(cell_text(&json!(0.25)), "0.25");
        assert_eq!(cell_text(&json!(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn test_row_cells_missing_column() {
        let columns = vec!["id".to_string(), "state".to_string()];
        let row = record(json!({"state": "running", "id": "i-1"}));
        assert_eq!(
            row_cells(&row, &columns),
            vec![Some("i-1".to_string()), Some("running".to_string())]
        );

        let partial = record(json!({"id": "i-2"}));
        assert_eq!(row_cells(&partial, &columns), vec![Some("i-2".to_string()), None]);
    }
}
