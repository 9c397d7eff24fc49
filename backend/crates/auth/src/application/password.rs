//! Password Use Cases
//!
//! Forgot-password, reset-with-token and change-password. All three are
//! simulated: they wait, log, and report success. Password values are never
//! logged.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Request a reset link
pub struct RequestPasswordResetUseCase {
    config: Arc<AuthConfig>,
}

impl RequestPasswordResetUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub async fn execute(&self, email: &str) -> AuthResult<&'static str> {
        self.config.latency.wait().await;

        if email == self.config.unknown_email {
            return Err(AuthError::EmailNotFound);
        }

        tracing::info!(email, "Password reset link sent");
        Ok("Link de recuperação enviado para seu email.")
    }
}

/// Set a new password using the token from the reset link
pub struct ResetPasswordUseCase {
    config: Arc<AuthConfig>,
}

impl ResetPasswordUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub async fn execute(
        &self,
        token: &str,
        _new_password: ClearTextPassword,
    ) -> AuthResult<&'static str> {
        self.config.latency.wait().await;

        tracing::info!(token, "Password reset");
        Ok("Senha redefinida com sucesso.")
    }
}

/// Change the password of the signed-in user
pub struct ChangePasswordUseCase {
    config: Arc<AuthConfig>,
}

impl ChangePasswordUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub async fn execute(
        &self,
        _current_password: ClearTextPassword,
        _new_password: ClearTextPassword,
    ) -> AuthResult<&'static str> {
        self.config.latency.wait().await;

        tracing::info!("Password changed");
        Ok("Senha alterada com sucesso.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::instant())
    }

    #[tokio::test]
    async fn test_request_reset() {
        let uc = RequestPasswordResetUseCase::new(config());
        assert_eq!(
            uc.execute("ana@teste.com").await.unwrap(),
            "Link de recuperação enviado para seu email."
        );

        let err = uc.execute("naoexiste@teste.com").await.unwrap_err();
        assert!(matches!(err, AuthError::EmailNotFound));
        assert_eq!(err.to_string(), "Email não encontrado.");
    }

    #[tokio::test]
    async fn test_custom_sentinel() {
        let config = AuthConfig {
            unknown_email: "ghost@teste.com".to_string(),
            ..AuthConfig::instant()
        };
        let uc = RequestPasswordResetUseCase::new(Arc::new(config));
        assert!(uc.execute("naoexiste@teste.com").await.is_ok());
        assert!(uc.execute("ghost@teste.com").await.is_err());
    }

    #[tokio::test]
    async fn test_reset_and_change_always_succeed() {
        let reset = ResetPasswordUseCase::new(config());
        assert_eq!(
            reset
                .execute("token-123", ClearTextPassword::new("NovaSenha1!"))
                .await
                .unwrap(),
            "Senha redefinida com sucesso."
        );

        let change = ChangePasswordUseCase::new(config());
        assert_eq!(
            change
                .execute(
                    ClearTextPassword::new("Antiga1!"),
                    ClearTextPassword::new("NovaSenha1!")
                )
                .await
                .unwrap(),
            "Senha alterada com sucesso."
        );
    }
}
