//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request failures are rendered by the
//! domain crates through `kernel::error::AppError`.

mod config;

use auth::{AuthConfig, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use cards::{CardConfig, cards_router};
use config::ApiConfig;
use platform::storage::{FileStore, KeyValueStore, MemoryStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,cards=info,platform=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    // Storage: one store shared by every router
    let app = match &config.storage_path {
        Some(path) => {
            let store = FileStore::open(path).await?;
            tracing::info!(path = %path.display(), "Using file storage");
            build_app(Arc::new(store), &config)
        }
        None => {
            tracing::info!("Using in-memory storage; data is lost on restart");
            build_app(Arc::new(MemoryStore::new()), &config)
        }
    };

    // Start server
    tracing::info!("Listening on {}", config.addr);

    let listener = TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Mount every router over `store` with CORS and request tracing.
fn build_app<S>(store: Arc<S>, config: &ApiConfig) -> Router
where
    S: KeyValueStore + Send + Sync + 'static,
{
    let auth_config = AuthConfig::default().with_latency_scale(config.latency_scale);
    let card_config = CardConfig::default().with_latency_scale(config.latency_scale);

    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    Router::new()
        .nest("/api/auth", auth_router(store.clone(), auth_config))
        .nest("/api/cards", cards_router(store, card_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_config() -> ApiConfig {
        ApiConfig::from_lookup(|key| (key == "VAULTFLOW_LATENCY_SCALE").then(|| "0".to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_routes_are_mounted() {
        let app = build_app(Arc::new(MemoryStore::new()), &test_config());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/cards")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/auth/session")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["authenticated"], false);
    }

    #[tokio::test]
    async fn test_login_and_cards_share_one_store() {
        let store = Arc::new(MemoryStore::new());
        let app = build_app(store.clone(), &test_config());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/auth/login")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"email":"dora@vault.io","password":"x"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let session = store.get_item("user").await.unwrap().unwrap();
        assert!(session.contains("dora@vault.io"));
    }
}
