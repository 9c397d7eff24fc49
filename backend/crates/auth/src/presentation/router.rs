//! Auth Router

use axum::{
    Router,
    routing::{get, post, put},
};
use platform::storage::KeyValueStore;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::infra::local_storage::LocalStorageAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router over a shared key-value store
pub fn auth_router<S>(store: Arc<S>, config: AuthConfig) -> Router
where
    S: KeyValueStore + Send + Sync + 'static,
{
    auth_router_generic(LocalStorageAuthRepository::new(store), config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .route("/session", get(handlers::session_status::<R>))
        .route("/password/forgot", post(handlers::forgot_password::<R>))
        .route("/password/reset", post(handlers::reset_password::<R>))
        .route("/password/change", post(handlers::change_password::<R>))
        .route("/profile", put(handlers::update_profile::<R>))
        .route("/validate", post(handlers::validate))
        .with_state(state)
}
