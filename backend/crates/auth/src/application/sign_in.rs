//! Sign In Use Case
//!
//! Mock login: any password is accepted. Known emails get their stored
//! profile back; unknown ones get a profile synthesized from the address.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

pub struct SignInInput {
    pub email: String,
    pub password: ClearTextPassword,
}

#[derive(Debug)]
pub struct SignInOutput {
    pub token: String,
    pub user: User,
}

pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository + Sync,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        self.config.latency.wait().await;

        let user = match self.user_repo.find_by_email(&input.email).await? {
            Some(user) => user,
            None => {
                tracing::debug!(email = %input.email, "Unknown email, synthesizing profile");
                User::synthesized_from_email(&input.email)
            }
        };

        tracing::info!(email = %user.email, "User signed in");

        Ok(SignInOutput {
            token: self.config.mock_token.clone(),
            user,
        })
    }
}
