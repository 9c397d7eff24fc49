//! User Entity
//!
//! Profile record kept in the stored user list. Credentials are never
//! persisted: the mock flow accepts any password.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_object::user_name::UserName;

/// User profile, keyed by `email`.
///
/// Fields are plain strings: records written by older front-end builds were
/// never validated, and they must still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Stand-in profile for an email with no stored record.
    pub fn synthesized_from_email(email: &str) -> Self {
        Self {
            name: UserName::fallback_for_email(email),
            email: email.to_string(),
        }
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }
}

/// `"name": null` reads as an empty name.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_user() {
        let user = User::synthesized_from_email("carla@teste.com");
        assert_eq!(user, User::new("carla", "carla@teste.com"));
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let user: User =
            serde_json::from_str(r#"{"email":"a@b.co","name":"Ana","avatar":"x.png"}"#).unwrap();
        assert_eq!(user, User::new("Ana", "a@b.co"));
    }

    #[test]
    fn test_deserialize_without_name() {
        let user: User = serde_json::from_str(r#"{"email":"a@b.co"}"#).unwrap();
        assert_eq!(user.name, "");
    }

    #[test]
    fn test_deserialize_null_name() {
        let user: User = serde_json::from_str(r#"{"name":null,"email":"a@b.co"}"#).unwrap();
        assert_eq!(user, User::new("", "a@b.co"));
    }
}
