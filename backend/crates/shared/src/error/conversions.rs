//! Error conversions - HTTP rendering of [`AppError`]

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// Failure body: the same `{ success, message }` envelope the front end
/// receives on success, so it can display `message` directly.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({
            "success": false,
            "error": self.kind(),
            "message": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}

/// Body that is not JSON → 400; JSON of the wrong shape → 422.
#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        use axum::extract::rejection::JsonRejection;

        let detail = rejection.body_text();
        let error = match rejection {
            JsonRejection::JsonDataError(_) => {
                AppError::unprocessable(format!("Dados inválidos: {detail}"))
            }
            _ => AppError::bad_request(format!("Corpo da requisição inválido: {detail}")),
        };
        error
            .with_action("Envie um corpo JSON com os campos esperados.")
            .with_source(rejection)
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_error_body() {
        let response = AppError::new(ErrorKind::NotFound, "Cartão não encontrado.")
            .with_action("Recarregue a lista")
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["message"], "Cartão não encontrado.");
        assert_eq!(body["action"], "Recarregue a lista");
    }
}
