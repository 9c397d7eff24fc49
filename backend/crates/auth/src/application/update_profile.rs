//! Update Profile Use Case

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

#[derive(Debug)]
pub struct UpdateProfileOutput {
    pub user: User,
    pub message: &'static str,
}

pub struct UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> UpdateProfileUseCase<U>
where
    U: UserRepository + Sync,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Upsert by email. Changing the email therefore creates a second
    /// record rather than renaming the first.
    pub async fn execute(&self, user: User) -> AuthResult<UpdateProfileOutput> {
        self.config.latency.wait().await;

        self.user_repo.upsert(&user).await?;

        tracing::info!(email = %user.email, "Profile updated");

        Ok(UpdateProfileOutput {
            user,
            message: "Perfil atualizado com sucesso!",
        })
    }
}
