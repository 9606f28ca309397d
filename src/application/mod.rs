// src/application/mod.rs

pub mod user_service;

// --- RE-EXPORTS (FACADE PATTERN) ---
pub use user_service::{UserInfo, UserService, UserStatus};
