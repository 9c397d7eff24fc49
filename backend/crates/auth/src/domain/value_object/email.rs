//! Email Value Object
//!
//! Shape check only: something, `@`, something, `.`, something, with no
//! whitespace and exactly one `@`. Whether the mailbox exists is not our
//! concern.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

/// Email validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    Empty,
    InvalidFormat,
}

impl EmailError {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Empty => "Email é obrigatório.",
            Self::InvalidFormat => "Formato de email inválido.",
        }
    }
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for EmailError {}

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and wrap. The address is kept exactly as typed: stored users
    /// are matched on the literal string.
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into();

        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        if !EMAIL_RE.is_match(&email) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, EmailError> {
        Email::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, EmailError> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("teste@exemplo.com").is_ok());
        assert!(Email::new("user.name+tag@example.co.jp").is_ok());
        assert!(Email::new("a@b.c").is_ok());
        // The pattern is permissive about odd characters
        assert!(Email::new("jo#o@ex-ample.com.br").is_ok());
    }

    #[test]
    fn test_email_empty() {
        assert_eq!(Email::new("").unwrap_err(), EmailError::Empty);
    }

    #[test]
    fn test_email_invalid() {
        for bad in [
            "teste.com",
            "user@",
            "@example.com",
            "user@@example.com",
            "user@example",
            "user@example.",
            "user@.com",
            "us er@example.com",
            "user@exa mple.com",
            " user@example.com",
            "user@example.com\n",
        ] {
            assert_eq!(
                Email::new(bad).unwrap_err(),
                EmailError::InvalidFormat,
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_email_keeps_case() {
        let email = Email::new("Maria@VaultFlow.dev").unwrap();
        assert_eq!(email.as_str(), "Maria@VaultFlow.dev");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(EmailError::Empty.to_string(), "Email é obrigatório.");
        assert_eq!(
            EmailError::InvalidFormat.to_string(),
            "Formato de email inválido."
        );
    }

    #[test]
    fn test_serde_validates() {
        assert!(serde_json::from_str::<Email>("\"a@b.co\"").is_ok());
        assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
    }
}
