// src/domain/validation.rs

use regex::Regex;
use std::sync::LazyLock;

// Deliberately simple format check. Full RFC 5322 parsing is out of scope
// for a sample crate.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

#[allow(clippy::expect_used)]
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("built-in email pattern must compile"));

/// Format-level email validation backed by a single compiled regex.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailValidator;

impl EmailValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn is_valid_email(&self, email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }
}
