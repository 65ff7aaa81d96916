//! Nutrition payloads as returned by the fruit service.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One row of nutrition data: field name to JSON value.
pub type NutritionRecord = serde_json::Map<String, Value>;

/// A nutrition payload normalized for tabular display.
///
/// The service answers with either a single JSON object or an array of
/// objects. Deserialization resolves the shape directly: an object becomes
/// [`NutritionTable::Single`], an array of objects becomes
/// [`NutritionTable::Rows`], and anything else is a decode error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NutritionTable {
    Single(NutritionRecord),
    Rows(Vec<NutritionRecord>),
}

impl NutritionTable {
    /// Number of rows the table renders.
    pub fn row_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Rows(rows) => rows.len(),
        }
    }

    /// Uniform row access. A single object yields exactly one row.
    pub fn rows(&self) -> impl Iterator<Item = &NutritionRecord> {
        match self {
            Self::Single(record) => std::slice::from_ref(record).iter(),
            Self::Rows(rows) => rows.iter(),
        }
    }

    /// Column names across all rows.
    ///
    /// Fields keep their per-record order; fields first seen in a later row
    /// are appended at the end.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        for record in self.rows() {
            for key in record.keys() {
                if !columns.contains(&key.as_str()) {
                    columns.push(key);
                }
            }
        }
        columns
    }
}

impl fmt::Display for NutritionTable {
    /// Plain-text table: a header line with the column names, then one line
    /// per row. Fields missing from a row render as empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.columns();
        writeln!(f, "{}", columns.join(" | "))?;
        for record in self.rows() {
            let cells: Vec<String> = columns
                .iter()
                .map(|c| record.get(*c).map(display_value).unwrap_or_default())
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> NutritionTable {
        serde_json::from_value(value).expect("valid nutrition payload")
    }

    #[test]
    fn test_object_body_becomes_single() {
        let table = parse(json!({"name": "apple", "calories": 52}));
        assert!(matches!(table, NutritionTable::Single(_)));
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_array_body_becomes_rows() {
        let table = parse(json!([
            {"name": "apple", "calories": 52},
            {"name": "crab apple", "calories": 76}
        ]));
        assert!(matches!(table, NutritionTable::Rows(_)));
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_scalar_body_is_rejected() {
        let result: Result<NutritionTable, _> = serde_json::from_value(json!(42));
        assert!(result.is_err());

        let result: Result<NutritionTable, _> = serde_json::from_value(json!(["a", "b"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_columns_union_across_rows() {
        let table = parse(json!([
            {"calories": 52, "name": "apple"},
            {"name": "crab apple", "sugar": 10}
        ]));
        assert_eq!(table.columns(), vec!["calories", "name", "sugar"]);
    }

    #[test]
    fn test_display_renders_header_and_rows() {
        let table = parse(json!({"calories": 52, "name": "apple"}));
        let rendered = table.to_string();
        assert_eq!(rendered, "calories | name\n52 | apple\n");
    }

    #[test]
    fn test_display_fills_missing_cells() {
        let table = parse(json!([
            {"calories": 52},
            {"sugar": 10}
        ]));
        let rendered = table.to_string();
        assert_eq!(rendered, "calories | sugar\n52 | \n | 10\n");
    }
}
