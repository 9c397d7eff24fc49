//! Session Use Case
//!
//! Tracks who is signed in. The state is the stored user itself; there is
//! no token validation in the mock flow.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

pub struct SessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> SessionUseCase<S>
where
    S: SessionRepository + Sync,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    pub async fn current_user(&self) -> AuthResult<Option<User>> {
        self.session_repo.current().await
    }

    pub async fn is_authenticated(&self) -> AuthResult<bool> {
        Ok(self.current_user().await?.is_some())
    }

    /// `None` signs the user out
    pub async fn set_user(&self, user: Option<&User>) -> AuthResult<()> {
        match user {
            Some(user) => {
                self.session_repo.save(user).await?;
                tracing::debug!(email = %user.email, "Session user set");
            }
            None => {
                self.session_repo.clear().await?;
                tracing::debug!("Session cleared");
            }
        }
        Ok(())
    }

    pub async fn logout(&self) -> AuthResult<()> {
        self.set_user(None).await
    }
}
