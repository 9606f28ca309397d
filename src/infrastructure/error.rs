// src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(respack::infra::database::duckdb),
        help("An error occurred inside the SQL engine.")
    )]
    DuckDB(#[from] duckdb::Error),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- LOOKUP ---
    #[error("Resource '{name}' not found in namespace '{namespace}'")]
    #[diagnostic(
        code(respack::infra::resource_missing),
        help("Check the resource name and the namespace directory.")
    )]
    ResourceNotFound { namespace: String, name: String },

    #[error("Namespace '{0}' not found")]
    #[diagnostic(code(respack::infra::namespace_missing))]
    NamespaceNotFound(String),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(respack::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(respack::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml(#[from] serde_yaml::Error),

    // --- TABULAR / CSV ---
    #[error("Malformed tabular resource '{name}': {source}")]
    #[diagnostic(
        code(respack::infra::table),
        help("Check the delimiter and the header line of the CSV file.")
    )]
    Table {
        name: String,
        source: DatabaseError,
    },

    // --- DATABASE QUERY ---
    #[error("Query against '{db_name}' failed: {source}")]
    #[diagnostic(
        code(respack::infra::query),
        help("Check the SQL syntax and that the referenced tables exist.")
    )]
    Query {
        db_name: String,
        source: DatabaseError,
    },

    // --- DATABASE (other engine failures, e.g. open) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),
}

// Manual implementation for shortcuts (e.g. `?` operator on duckdb calls)
impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDB(err))
    }
}
