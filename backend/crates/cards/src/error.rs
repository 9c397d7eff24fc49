//! Card Error Types
//!
//! `Display` is the exact message shown to the user.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::storage::StorageError;
use thiserror::Error;

pub type CardResult<T> = Result<T, CardError>;

#[derive(Debug, Error)]
pub enum CardError {
    /// Update without an id
    #[error("ID do cartão é obrigatório para atualização.")]
    MissingId,

    /// Delete with an empty id
    #[error("ID do cartão inválido.")]
    InvalidId,

    #[error("Cartão não encontrado.")]
    NotFound { id: String },

    #[error("Falha ao acessar o armazenamento: {0}")]
    Storage(#[from] StorageError),
}

impl CardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CardError::MissingId | CardError::InvalidId => ErrorKind::BadRequest,
            CardError::NotFound { .. } => ErrorKind::NotFound,
            CardError::Storage(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            CardError::Storage(_) => AppError::internal("Falha ao acessar o armazenamento.")
                .with_action("Tente novamente em instantes."),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            CardError::Storage(e) => {
                tracing::error!(error = %e, "Card storage error");
            }
            CardError::NotFound { id } => {
                tracing::debug!(card_id = %id, "Card not found");
            }
            _ => {
                tracing::debug!(error = %self, "Card request rejected");
            }
        }
    }
}

impl From<CardError> for AppError {
    fn from(err: CardError) -> Self {
        let app_error = err.to_app_error();
        match err {
            CardError::Storage(source) => app_error.with_source(source),
            _ => app_error,
        }
    }
}

impl IntoResponse for CardError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
