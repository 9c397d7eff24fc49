//! Cards Router

use axum::{
    Router,
    routing::{get, put},
};
use platform::storage::KeyValueStore;
use std::sync::Arc;

use crate::application::config::CardConfig;
use crate::domain::repository::CardRepository;
use crate::infra::local_storage::LocalStorageCardRepository;
use crate::presentation::handlers::{self, CardsAppState};

/// Create the Cards router over a shared key-value store
pub fn cards_router<S>(store: Arc<S>, config: CardConfig) -> Router
where
    S: KeyValueStore + Send + Sync + 'static,
{
    cards_router_generic(LocalStorageCardRepository::new(store), config)
}

/// Create a generic Cards router for any repository implementation
pub fn cards_router_generic<R>(repo: R, config: CardConfig) -> Router
where
    R: CardRepository + Clone + Send + Sync + 'static,
{
    let state = CardsAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_cards::<R>).post(handlers::create_card::<R>),
        )
        .route(
            "/{id}",
            put(handlers::update_card::<R>).delete(handlers::delete_card::<R>),
        )
        .with_state(state)
}
