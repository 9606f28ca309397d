// src/infrastructure/mod.rs

pub mod adapters;
pub mod error;
pub mod resources;

pub use error::InfrastructureError;
