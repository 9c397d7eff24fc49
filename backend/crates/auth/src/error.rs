//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. `Display` is the exact message the
//! front end shows to the user.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::storage::StorageError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration attempted with an address that is already taken
    #[error("Este email já está em uso.")]
    EmailTaken,

    /// Password reset requested for an unknown address
    #[error("Email não encontrado.")]
    EmailNotFound,

    /// Backing store failure
    #[error("Falha ao acessar o armazenamento: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::EmailNotFound => ErrorKind::NotFound,
            AuthError::Storage(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError; store details stay out of the user message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Storage(_) => AppError::internal("Falha ao acessar o armazenamento.")
                .with_action("Tente novamente em instantes."),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Auth storage error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let app_error = err.to_app_error();
        match err {
            AuthError::Storage(source) => app_error.with_source(source),
            _ => app_error,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
