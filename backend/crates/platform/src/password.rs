//! Password Strength Rules
//!
//! Five independent requirements, each reported separately so a form can
//! show every unmet rule at once:
//! - at least [`MIN_PASSWORD_LENGTH`] characters
//! - an uppercase ASCII letter
//! - a lowercase ASCII letter
//! - an ASCII digit
//! - one of [`SPECIAL_CHARACTERS`]
//!
//! Also provides [`ClearTextPassword`], which keeps user-typed passwords out
//! of logs and wipes them from memory on drop.

use std::fmt;

use serde::{Deserialize, Deserializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters accepted for the special-character rule
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

// ============================================================================
// Requirements
// ============================================================================

/// A single strength rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRequirement {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    SpecialCharacter,
}

impl PasswordRequirement {
    /// Every rule, in the order failures are reported
    pub const ALL: [PasswordRequirement; 5] = [
        PasswordRequirement::MinLength,
        PasswordRequirement::Uppercase,
        PasswordRequirement::Lowercase,
        PasswordRequirement::Digit,
        PasswordRequirement::SpecialCharacter,
    ];

    pub fn is_met_by(&self, password: &str) -> bool {
        match self {
            Self::MinLength => password.chars().count() >= MIN_PASSWORD_LENGTH,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Self::SpecialCharacter => password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }

    /// User-facing label shown next to the password field
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MinLength => "Mínimo de 8 caracteres",
            Self::Uppercase => "Pelo menos 1 letra maiúscula",
            Self::Lowercase => "Pelo menos 1 letra minúscula",
            Self::Digit => "Pelo menos 1 número",
            Self::SpecialCharacter => "Pelo menos 1 caractere especial",
        }
    }
}

impl fmt::Display for PasswordRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rules the password does not satisfy, in [`PasswordRequirement::ALL`] order.
pub fn unmet_requirements(password: &str) -> Vec<PasswordRequirement> {
    PasswordRequirement::ALL
        .into_iter()
        .filter(|rule| !rule.is_met_by(password))
        .collect()
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// User-typed password.
///
/// - Debug output is redacted
/// - Not `Clone`, to avoid stray copies
/// - Memory is zeroized on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn unmet_requirements(&self) -> Vec<PasswordRequirement> {
        unmet_requirements(&self.0)
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

impl<'de> Deserialize<'de> for ClearTextPassword {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}

// ============================================================================
// Tests
// ============================================================================
