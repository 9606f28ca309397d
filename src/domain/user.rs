// src/domain/user.rs

use serde::{Deserialize, Serialize};

/// A user account. Freshly constructed users start inactive and must be
/// activated explicitly (normally by [`crate::application::UserService`]).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_active: bool,
}

impl User {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            is_active: false,
        }
    }

    /// Consuming builder-style activation, so construction chains:
    /// `User::new(..).activate()`.
    #[must_use]
    pub fn activate(mut self) -> Self {
        self.is_active = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_inactive() {
        let user = User::new("alice", "alice@example.com");
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert!(!user.is_active);
    }

    #[test]
    fn test_activate_chains() {
        let user = User::new("bob", "bob@example.com").activate();
        assert!(user.is_active);
    }
}
