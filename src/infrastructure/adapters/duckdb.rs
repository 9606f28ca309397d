// src/infrastructure/adapters/duckdb.rs

use duckdb::types::ValueRef;
use duckdb::{Config, Connection};
use serde_json::Value;
use std::path::Path;

use crate::domain::table::Table;
use crate::infrastructure::error::InfrastructureError;

/// Thin wrapper around one DuckDB connection.
///
/// This is the single tabular strategy of the crate: bundled database files
/// are opened directly, and CSV resources go through the engine's
/// `read_csv_auto` reader instead of a second parser.
pub struct DuckDbEngine {
    conn: Connection,
}

impl DuckDbEngine {
    /// Open a file-backed database (a bundled `.duckdb` resource).
    pub fn open(db_path: &Path) -> Result<Self, InfrastructureError> {
        let conn = Connection::open_with_flags(db_path, Config::default())?;
        Ok(Self { conn })
    }

    /// Open a transient in-memory database, used as the CSV reader.
    pub fn in_memory() -> Result<Self, InfrastructureError> {
        let conn = Connection::open_in_memory_with_flags(Config::default())?;
        Ok(Self { conn })
    }

    /// Execute one statement and materialize the full result.
    ///
    /// A statement returning zero rows yields an empty [`Table`] whose column
    /// names still describe the result shape.
    pub fn query(&self, sql: &str) -> Result<Table, InfrastructureError> {
        let mut stmt = self.conn.prepare(sql)?;

        let mut columns: Vec<String> = Vec::new();
        let mut records: Vec<Vec<Value>> = Vec::new();
        {
            let mut rows = stmt.query([])?;
            while let Some(row) = rows.next()? {
                let stmt_ref: &duckdb::Statement<'_> = row.as_ref();
                if columns.is_empty() {
                    columns = stmt_ref
                        .column_names()
                        .into_iter()
                        .map(String::from)
                        .collect();
                }
                let count = stmt_ref.column_count();
                let mut record = Vec::with_capacity(count);
                for idx in 0..count {
                    record.push(cell_to_value(row.get_ref(idx)?));
                }
                records.push(record);
            }
        }
        if columns.is_empty() {
            // Zero-row result: the statement has run, so its metadata is valid.
            columns = stmt.column_names().into_iter().map(String::from).collect();
        }

        let mut table = Table::new(columns);
        for record in records {
            table.push_row(record);
        }
        Ok(table)
    }

    /// Decode a delimited file through `read_csv_auto`.
    pub fn load_csv(&self, path: &Path) -> Result<Table, InfrastructureError> {
        let escaped = path.to_string_lossy().replace('\'', "''");
        self.query(&format!("SELECT * FROM read_csv_auto('{escaped}')"))
    }

    pub fn engine_name(&self) -> &'static str {
        "duckdb"
    }
}

fn cell_to_value(cell: ValueRef<'_>) -> Value {
    match cell {
        ValueRef::Null => Value::Null,
        ValueRef::Boolean(b) => Value::Bool(b),
        ValueRef::TinyInt(i) => Value::from(i),
        ValueRef::SmallInt(i) => Value::from(i),
        ValueRef::Int(i) => Value::from(i),
        ValueRef::BigInt(i) => Value::from(i),
        ValueRef::UTinyInt(i) => Value::from(i),
        ValueRef::USmallInt(i) => Value::from(i),
        ValueRef::UInt(i) => Value::from(i),
        ValueRef::UBigInt(i) => Value::from(i),
        ValueRef::Float(f) => Value::from(f),
        ValueRef::Double(f) => Value::from(f),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        // Timestamps, decimals, blobs, nested types: rendered as debug text.
        other => Value::String(format!("{other:?}")),
    }
}
