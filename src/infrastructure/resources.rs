// src/infrastructure/resources.rs
//
// The resource accessor: read-only, typed access to files bundled with the
// package. Every operation is a stateless free function that re-reads the
// underlying storage on each call; there is no cache and no shared state.
//
// A namespace is a directory, a resource is a plain file inside it. All
// operations resolve resources through the same strategy (one join plus a
// file-type check), including the existence probe.

use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument};

use crate::domain::table::Table;
use crate::infrastructure::adapters::DuckDbEngine;
use crate::infrastructure::error::InfrastructureError;

/// Generic key-value configuration document.
pub type ConfigMap = BTreeMap<String, serde_yaml::Value>;

/// Root namespace of the resources shipped with this crate.
pub fn bundled_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("resources")
}

/// Resolve `(namespace, name)` to a concrete path, for operations that need
/// direct file access (the embedded database engine).
pub fn resolve_path(namespace: &Path, name: &str) -> Result<PathBuf, InfrastructureError> {
    if !namespace.is_dir() {
        return Err(InfrastructureError::NamespaceNotFound(
            namespace.display().to_string(),
        ));
    }
    let path = namespace.join(name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(InfrastructureError::ResourceNotFound {
            namespace: namespace.display().to_string(),
            name: name.to_string(),
        })
    }
}

/// Read the full text content of a resource.
pub fn read_text(namespace: &Path, name: &str) -> Result<String, InfrastructureError> {
    let path = resolve_path(namespace, name)?;
    fs::read_to_string(path).map_err(InfrastructureError::Io)
}

/// Load a YAML resource as a generic key-value mapping.
#[instrument(skip(namespace))]
pub fn load_config(namespace: &Path, name: &str) -> Result<ConfigMap, InfrastructureError> {
    load_config_as(namespace, name)
}

/// Load a YAML resource into a typed structure.
pub fn load_config_as<T: DeserializeOwned>(
    namespace: &Path,
    name: &str,
) -> Result<T, InfrastructureError> {
    let content = read_text(namespace, name)?;
    let parsed = serde_yaml::from_str(&content)?;
    info!(resource = name, "Configuration loaded");
    Ok(parsed)
}

/// Decode a delimited tabular resource (CSV with a header line) into rows
/// with named columns.
#[instrument(skip(namespace))]
pub fn load_table(namespace: &Path, name: &str) -> Result<Table, InfrastructureError> {
    let path = resolve_path(namespace, name)?;
    let engine = DuckDbEngine::in_memory()?;
    engine.load_csv(&path).map_err(|err| match err {
        InfrastructureError::Database(source) => InfrastructureError::Table {
            name: name.to_string(),
            source,
        },
        other => other,
    })
}

/// Execute a query against a file-backed database resource.
///
/// A failed query is a typed error, distinct from a query that legitimately
/// returns zero rows (an empty, non-error [`Table`]).
#[instrument(skip(namespace, query))]
pub fn query_database(
    namespace: &Path,
    db_name: &str,
    query: &str,
) -> Result<Table, InfrastructureError> {
    let path = resolve_path(namespace, db_name)?;
    let engine = DuckDbEngine::open(&path)?;
    match engine.query(query) {
        Ok(table) => {
            info!(db = db_name, rows = table.len(), "Query executed");
            Ok(table)
        }
        Err(InfrastructureError::Database(source)) => {
            error!(db = db_name, %source, "Database query failed");
            Err(InfrastructureError::Query {
                db_name: db_name.to_string(),
                source,
            })
        }
        Err(other) => Err(other),
    }
}

/// List the names of all plain files directly under a namespace.
/// Sub-namespaces (directories) are excluded. Order is not guaranteed.
pub fn list_resources(namespace: &Path) -> Result<Vec<String>, InfrastructureError> {
    if !namespace.is_dir() {
        return Err(InfrastructureError::NamespaceNotFound(
            namespace.display().to_string(),
        ));
    }
    let mut names = Vec::new();
    for entry in fs::read_dir(namespace)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

/// True iff the resource is present and a regular file. Never errors: an
/// inaccessible resource (missing, or e.g. permission denied on the
/// namespace) reads as absent.
pub fn resource_exists(namespace: &Path, name: &str) -> bool {
    resolve_path(namespace, name).is_ok()
}
