//! User Password Value Object
//!
//! Password strength verdicts for the sign-up, reset and change-password
//! forms. The individual rules live in `platform::password`; this module
//! turns them into the messages the forms display.

use platform::password::unmet_requirements;
use serde::Serialize;
use std::fmt;

/// Outcome of checking a password against every strength rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordCheck {
    pub valid: bool,
    /// Empty when valid
    pub message: String,
    /// Labels of unmet rules; empty when valid or when no password was given
    pub requirements: Vec<String>,
}

impl PasswordCheck {
    pub fn evaluate(password: &str) -> Self {
        if password.is_empty() {
            return Self {
                valid: false,
                message: "Senha é obrigatória.".to_string(),
                requirements: Vec::new(),
            };
        }

        let unmet = unmet_requirements(password);
        if unmet.is_empty() {
            return Self {
                valid: true,
                message: String::new(),
                requirements: Vec::new(),
            };
        }

        Self {
            valid: false,
            message: "A senha não atende aos requisitos.".to_string(),
            requirements: unmet.iter().map(|r| r.label().to_string()).collect(),
        }
    }
}

/// Password confirmation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPasswordError {
    Empty,
    Mismatch,
}

impl fmt::Display for ConfirmPasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Confirmação de senha é obrigatória."),
            Self::Mismatch => f.write_str("As senhas não coincidem."),
        }
    }
}

impl std::error::Error for ConfirmPasswordError {}

/// Check that the confirmation field repeats the password exactly.
pub fn confirm_password(password: &str, confirmation: &str) -> Result<(), ConfirmPasswordError> {
    if confirmation.is_empty() {
        return Err(ConfirmPasswordError::Empty);
    }
    if password != confirmation {
        return Err(ConfirmPasswordError::Mismatch);
    }
    Ok(())
}
