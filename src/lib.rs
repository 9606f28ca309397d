// src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Domain (core types)
// User entity, email validation, the Table value type.
// Depends on nothing else (no infra, no app).
pub mod domain;

// 2. Infrastructure (Adapters)
// Technical implementation (filesystem resources, YAML, DuckDB).
// Depends on the Domain.
pub mod infrastructure;

// 3. Application (Use Cases)
// Orchestration (UserService).
// Depends on the Domain and the Infra.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Lets callers import the essentials directly: use respack::{resources, User};
pub use application::{UserInfo, UserService, UserStatus};
pub use domain::table::Table;
pub use domain::user::User;
pub use domain::validation::EmailValidator;
pub use error::RespackError;
pub use infrastructure::resources;
