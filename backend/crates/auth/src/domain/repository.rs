//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::error::AuthResult;

/// Stored user list
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Every stored user, in insertion order
    async fn list(&self) -> AuthResult<Vec<User>>;

    /// Find user by exact email match
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// Insert, or replace the record with the same email (moved to the end)
    async fn upsert(&self, user: &User) -> AuthResult<()>;
}

/// Currently signed-in user
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    async fn current(&self) -> AuthResult<Option<User>>;

    async fn save(&self, user: &User) -> AuthResult<()>;

    async fn clear(&self) -> AuthResult<()>;
}
