// src/application/user_service.rs
//
// USE CASE: account creation. Validate the email, construct the entity,
// activate it. No persistence; this is a façade over the domain types.

use serde::Serialize;
use std::fmt;
use tracing::info;

use crate::domain::error::DomainError;
use crate::domain::user::User;
use crate::domain::validation::EmailValidator;
use crate::error::RespackError;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// Serializable projection of a [`User`] for display or export.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub username: String,
    pub email: String,
    pub status: UserStatus,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UserService {
    validator: EmailValidator,
}

impl UserService {
    pub fn new() -> Self {
        Self {
            validator: EmailValidator::new(),
        }
    }

    /// Create and activate a user. Rejects malformed email addresses with a
    /// typed domain error.
    pub fn create_user(&self, username: &str, email: &str) -> Result<User, RespackError> {
        if !self.validator.is_valid_email(email) {
            return Err(DomainError::InvalidEmail(email.to_string()).into());
        }
        let user = User::new(username, email).activate();
        info!(username = %user.username, "User created");
        Ok(user)
    }

    pub fn user_info(&self, user: &User) -> UserInfo {
        UserInfo {
            username: user.username.clone(),
            email: user.email.clone(),
            status: if user.is_active {
                UserStatus::Active
            } else {
                UserStatus::Inactive
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_create_user_success() -> Result<()> {
        let service = UserService::new();
        let user = service.create_user("john_doe", "john@example.com")?;

        assert_eq!(user.username, "john_doe");
        assert_eq!(user.email, "john@example.com");
        assert!(user.is_active);
        Ok(())
    }

    #[test]
    fn test_create_user_invalid_email() {
        let service = UserService::new();
        let err = service.create_user("john_doe", "invalid-email").unwrap_err();
        assert!(matches!(
            err,
            RespackError::Domain(DomainError::InvalidEmail(_))
        ));
        assert!(err.to_string().contains("Invalid email format"));
    }

    #[test]
    fn test_user_info_projection() -> Result<()> {
        let service = UserService::new();
        let user = service.create_user("john_doe", "john@example.com")?;

        let info = service.user_info(&user);
        assert_eq!(
            info,
            UserInfo {
                username: "john_doe".into(),
                email: "john@example.com".into(),
                status: UserStatus::Active,
            }
        );
        Ok(())
    }

    #[test]
    fn test_user_info_inactive_status() {
        let service = UserService::new();
        let user = User::new("alice", "alice@example.com");
        assert_eq!(service.user_info(&user).status, UserStatus::Inactive);
    }

    #[test]
    fn test_email_validation_cases() {
        let service = UserService::new();
        let cases = [
            ("test@example.com", true),
            ("user@domain.co.uk", true),
            ("invalid-email", false),
            ("test@", false),
            ("@domain.com", false),
        ];
        for (email, is_valid) in cases {
            let result = service.create_user("username", email);
            assert_eq!(result.is_ok(), is_valid, "unexpected verdict for '{email}'");
            if let Ok(user) = result {
                assert_eq!(user.email, email);
            }
        }
    }

    #[test]
    fn test_status_serializes_lowercase() -> Result<()> {
        let service = UserService::new();
        let user = service.create_user("alice", "alice@example.com")?;
        let json = serde_json::to_value(service.user_info(&user))?;
        assert_eq!(json["status"], serde_json::json!("active"));
        Ok(())
    }
}
