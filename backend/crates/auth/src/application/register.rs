//! Register Use Case
//!
//! Stores the profile of a new account. Input validation is the form's job
//! (see `crate::validation`); this step only rejects the taken-email sentinel.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

pub struct RegisterInput {
    pub name: String,
    pub email: String,
    /// Accepted and dropped; the mock keeps no credentials
    pub password: ClearTextPassword,
}

#[derive(Debug)]
pub struct RegisterOutput {
    pub message: &'static str,
}

pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository + Sync,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        self.config.latency.wait().await;

        if input.email == self.config.taken_email {
            return Err(AuthError::EmailTaken);
        }

        let user = User::new(input.name, input.email);
        self.user_repo.upsert(&user).await?;

        tracing::info!(email = %user.email, name = %user.name, "User registered");

        Ok(RegisterOutput {
            message: "Usuário cadastrado com sucesso!",
        })
    }
}
