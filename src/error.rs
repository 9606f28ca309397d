// src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RespackError {
    // --- DOMAIN ERRORS (entity rules, validation) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, parsing, database) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

// Manual implementation to avoid a duplicate enum variant but keep ergonomics
impl From<std::io::Error> for RespackError {
    fn from(err: std::io::Error) -> Self {
        RespackError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<serde_yaml::Error> for RespackError {
    fn from(err: serde_yaml::Error) -> Self {
        RespackError::Infrastructure(InfrastructureError::Yaml(err))
    }
}
