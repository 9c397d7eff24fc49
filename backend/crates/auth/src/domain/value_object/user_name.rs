//! User Name Value Object
//!
//! Display name shown on the profile page. Free text; only presence and a
//! minimum length are enforced.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length for a display name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Fallback used when no better name can be derived
pub const DEFAULT_USER_NAME: &str = "Usuário";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserNameError {
    Empty,
    TooShort { length: usize, min: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Nome é obrigatório."),
            Self::TooShort { min, .. } => {
                write!(f, "Nome deve ter pelo menos {min} caracteres.")
            }
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated display name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    pub fn new(input: impl Into<String>) -> Result<Self, UserNameError> {
        let name = input.into();

        if name.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = name.chars().count();
        if length < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort {
                length,
                min: USER_NAME_MIN_LENGTH,
            });
        }

        Ok(Self(name))
    }

    /// Name derived from an email address: the part before the first `@`,
    /// or [`DEFAULT_USER_NAME`] when that part is empty.
    ///
    /// Not validated; `"ab@x.io"` yields `"ab"`.
    pub fn fallback_for_email(email: &str) -> String {
        match email.split('@').next() {
            Some(local) if !local.is_empty() => local.to_string(),
            _ => DEFAULT_USER_NAME.to_string(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, UserNameError> {
        UserName::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(UserName::new("Ana").is_ok());
        assert!(UserName::new("Maria da Silva").is_ok());
        // counted in characters
        assert!(UserName::new("Zoë").is_ok());
    }

    #[test]
    fn test_empty() {
        let err = UserName::new("").unwrap_err();
        assert_eq!(err, UserNameError::Empty);
        assert_eq!(err.to_string(), "Nome é obrigatório.");
    }

    #[test]
    fn test_too_short() {
        let err = UserName::new("Jo").unwrap_err();
        assert_eq!(err, UserNameError::TooShort { length: 2, min: 3 });
        assert_eq!(err.to_string(), "Nome deve ter pelo menos 3 caracteres.");
    }

    #[test]
    fn test_fallback_for_email() {
        assert_eq!(UserName::fallback_for_email("joana@teste.com"), "joana");
        assert_eq!(UserName::fallback_for_email("sem-arroba"), "sem-arroba");
        assert_eq!(UserName::fallback_for_email("@teste.com"), "Usuário");
        assert_eq!(UserName::fallback_for_email(""), "Usuário");
    }
}
