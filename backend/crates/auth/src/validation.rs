//! Form Validation
//!
//! Field checks used by the sign-up, login, reset and profile forms. Each
//! check yields either `Ok(())` or an error whose `Display` is the message
//! shown under the field.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_object::email::{Email, EmailError};
use crate::domain::value_object::user_name::{UserName, UserNameError};
use crate::domain::value_object::user_password::{
    ConfirmPasswordError, PasswordCheck, confirm_password,
};

pub fn validate_name(name: &str) -> Result<(), UserNameError> {
    UserName::new(name).map(|_| ())
}

pub fn validate_email(email: &str) -> Result<(), EmailError> {
    Email::new(email).map(|_| ())
}

pub fn validate_password(password: &str) -> PasswordCheck {
    PasswordCheck::evaluate(password)
}

pub fn validate_confirm_password(
    password: &str,
    confirmation: &str,
) -> Result<(), ConfirmPasswordError> {
    confirm_password(password, confirmation)
}

/// Fields of a form; absent fields are not checked.
#[derive(Debug, Default, Clone)]
pub struct FormInput<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub password: Option<&'a str>,
    pub confirm_password: Option<&'a str>,
}

/// Per-field messages for a whole form.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormErrors {
    /// Field name → message, only for failing fields
    pub errors: BTreeMap<&'static str, String>,
    /// Unmet password rules, when a password was checked
    pub password_requirements: Vec<String>,
}

impl FormErrors {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn record(&mut self, field: &'static str, result: Result<(), impl ToString>) {
        if let Err(e) = result {
            self.errors.insert(field, e.to_string());
        }
    }
}

/// Run every applicable check over a form.
///
/// The confirmation is only compared when a password field is present.
pub fn validate_form(input: &FormInput<'_>) -> FormErrors {
    let mut out = FormErrors::default();

    if let Some(name) = input.name {
        out.record("name", validate_name(name));
    }
    if let Some(email) = input.email {
        out.record("email", validate_email(email));
    }
    if let Some(password) = input.password {
        let check = validate_password(password);
        if !check.valid {
            out.errors.insert("password", check.message);
            out.password_requirements = check.requirements;
        }
        if let Some(confirmation) = input.confirm_password {
            out.record(
                "confirmPassword",
                validate_confirm_password(password, confirmation),
            );
        }
    }

    out
}
