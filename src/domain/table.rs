// src/domain/table.rs

use serde::Serialize;
use serde_json::Value;

/// In-memory result of a tabular load or a database query: ordered column
/// names plus rows of loosely-typed cells.
///
/// A `Table` with zero rows is a valid result ("no rows matched") and is
/// distinct from a failed load, which surfaces as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Number of data rows (the header is not a row).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell lookup by row index and column name.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    pub fn push_row(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Table {
        let mut table = Table::new(vec!["id".into(), "name".into()]);
        table.push_row(vec![json!(1), json!("alice")]);
        table.push_row(vec![json!(2), json!("bob")]);
        table
    }

    #[test]
    fn test_cell_lookup_by_column_name() {
        let table = sample();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0, "name"), Some(&json!("alice")));
        assert_eq!(table.get(1, "id"), Some(&json!(2)));
    }

    #[test]
    fn test_missing_column_or_row_is_none() {
        let table = sample();
        assert_eq!(table.get(0, "nope"), None);
        assert_eq!(table.get(9, "id"), None);
    }

    #[test]
    fn test_empty_table_is_not_an_error_state() {
        let table = Table::new(vec!["id".into()]);
        assert!(table.is_empty());
        assert_eq!(table.columns(), ["id".to_string()]);
    }
}
