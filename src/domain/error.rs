// src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid email format: '{0}'")]
    #[diagnostic(
        code(respack::domain::invalid_email),
        help("Expected something like 'user@example.com'.")
    )]
    InvalidEmail(String),
}
