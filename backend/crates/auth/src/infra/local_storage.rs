//! Key-Value Store Repository Implementations
//!
//! The user list lives under [`USERS_KEY`] as a JSON array and the signed-in
//! user under [`SESSION_KEY`] as a JSON object, matching what the web front
//! end writes to browser local storage.
//!
//! The user list is decoded entry by entry. Entries that do not decode are
//! left out of reads but written back untouched, so one bad record never
//! costs the others.

use std::sync::Arc;

use platform::storage::{KeyValueStore, StorageError, read_json, write_json};
use serde_json::Value;

use crate::domain::entity::user::User;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthResult;

/// Storage key of the user list
pub const USERS_KEY: &str = "vaultflow_users";

/// Storage key of the signed-in user
pub const SESSION_KEY: &str = "user";

/// Auth repository backed by any [`KeyValueStore`]
pub struct LocalStorageAuthRepository<S> {
    store: Arc<S>,
}

impl<S> LocalStorageAuthRepository<S>
where
    S: KeyValueStore + Send + Sync,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Raw stored entries; unreadable blob → empty list
    async fn load_entries(&self) -> AuthResult<Vec<Value>> {
        let entries: Option<Vec<Value>> = read_json(self.store.as_ref(), USERS_KEY).await?;
        Ok(entries.unwrap_or_default())
    }

    async fn load_users(&self) -> AuthResult<Vec<User>> {
        Ok(decode_users(self.load_entries().await?))
    }
}

fn decode_users(entries: Vec<Value>) -> Vec<User> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<User>(entry) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping malformed stored user");
                None
            }
        })
        .collect()
}

fn entry_has_email(entry: &Value, email: &str) -> bool {
    entry.get("email").and_then(Value::as_str) == Some(email)
}

impl<S> Clone for LocalStorageAuthRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl<S> UserRepository for LocalStorageAuthRepository<S>
where
    S: KeyValueStore + Send + Sync,
{
    async fn list(&self) -> AuthResult<Vec<User>> {
        self.load_users().await
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        let users = self.load_users().await?;
        Ok(users.into_iter().find(|u| u.has_email(email)))
    }

    async fn upsert(&self, user: &User) -> AuthResult<()> {
        let mut entries = self.load_entries().await?;
        entries.retain(|entry| !entry_has_email(entry, &user.email));
        entries.push(serde_json::to_value(user).map_err(StorageError::from)?);

        write_json(self.store.as_ref(), USERS_KEY, &entries).await?;

        tracing::debug!(email = %user.email, total = entries.len(), "Stored user");
        Ok(())
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl<S> SessionRepository for LocalStorageAuthRepository<S>
where
    S: KeyValueStore + Send + Sync,
{
    async fn current(&self) -> AuthResult<Option<User>> {
        Ok(read_json(self.store.as_ref(), SESSION_KEY).await?)
    }

    async fn save(&self, user: &User) -> AuthResult<()> {
        write_json(self.store.as_ref(), SESSION_KEY, user).await?;
        Ok(())
    }

    async fn clear(&self) -> AuthResult<()> {
        self.store.remove_item(SESSION_KEY).await?;
        Ok(())
    }
}
