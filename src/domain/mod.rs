pub mod error;
pub mod table;
pub mod user;
pub mod validation;

// Convenience re-exports to simplify imports elsewhere
pub use error::DomainError;
pub use table::Table;
pub use user::User;
