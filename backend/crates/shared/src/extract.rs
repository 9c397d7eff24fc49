//! Request extractors whose rejections use the [`AppError`] envelope.

use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::app_error::AppError;

/// Drop-in for `axum::Json`. A body that fails to parse is answered with
/// `{ success: false, message }` instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

impl<T> IntoResponse for ApiJson<T>
where
    axum::Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Serialize)]
    struct Named {
        name: String,
    }

    async fn echo(ApiJson(body): ApiJson<Named>) -> ApiJson<Named> {
        ApiJson(body)
    }

    async fn send(content_type: &str, body: &'static str) -> (StatusCode, serde_json::Value) {
        let app = Router::new().route("/", post(echo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_valid_body_passes_through() {
        let (status, body) = send("application/json", r#"{"name":"Ana"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ana");
    }

    #[tokio::test]
    async fn test_wrong_shape_is_enveloped_422() {
        let (status, body) = send("application/json", r#"{"name":42}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "UNPROCESSABLE_ENTITY");
        assert!(body["message"].as_str().unwrap().starts_with("Dados inválidos"));
    }

    #[tokio::test]
    async fn test_syntax_error_is_enveloped_400() {
        let (status, body) = send("application/json", "{").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_enveloped() {
        let (status, body) = send("text/plain", r#"{"name":"Ana"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }
}
