//! HTTP Handlers

use axum::Json;
use kernel::extract::ApiJson;
use axum::extract::{Path, State};
use std::sync::Arc;

use crate::application::{
    CardConfig, CreateCardUseCase, DeleteCardUseCase, ListCardsUseCase, UpdateCardUseCase,
};
use crate::domain::entity::card::{CardDraft, CardPatch};
use crate::domain::repository::CardRepository;
use crate::error::CardResult;
use crate::presentation::dto::{CardListResponse, CardResponse, MessageResponse};

/// Shared state for card handlers
#[derive(Clone)]
pub struct CardsAppState<R>
where
    R: CardRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<CardConfig>,
}

/// GET /api/cards
pub async fn list_cards<R>(State(state): State<CardsAppState<R>>) -> CardResult<Json<CardListResponse>>
where
    R: CardRepository + Clone + Send + Sync + 'static,
{
    let cards = ListCardsUseCase::new(state.repo.clone(), state.config.clone())
        .execute()
        .await?;

    Ok(Json(CardListResponse {
        success: true,
        cards,
    }))
}

/// POST /api/cards
pub async fn create_card<R>(
    State(state): State<CardsAppState<R>>,
    ApiJson(draft): ApiJson<CardDraft>,
) -> CardResult<Json<CardResponse>>
where
    R: CardRepository + Clone + Send + Sync + 'static,
{
    let output = CreateCardUseCase::new(state.repo.clone(), state.config.clone())
        .execute(draft)
        .await?;

    Ok(Json(CardResponse {
        success: true,
        card: output.card,
        message: output.message.to_string(),
    }))
}

/// PUT /api/cards/{id}
///
/// The path id wins over any `id` in the body.
pub async fn update_card<R>(
    State(state): State<CardsAppState<R>>,
    Path(id): Path<String>,
    ApiJson(mut patch): ApiJson<CardPatch>,
) -> CardResult<Json<CardResponse>>
where
    R: CardRepository + Clone + Send + Sync + 'static,
{
    patch.id = Some(id);

    let output = UpdateCardUseCase::new(state.repo.clone(), state.config.clone())
        .execute(patch)
        .await?;

    Ok(Json(CardResponse {
        success: true,
        card: output.card,
        message: output.message.to_string(),
    }))
}

/// DELETE /api/cards/{id}
pub async fn delete_card<R>(
    State(state): State<CardsAppState<R>>,
    Path(id): Path<String>,
) -> CardResult<Json<MessageResponse>>
where
    R: CardRepository + Clone + Send + Sync + 'static,
{
    let message = DeleteCardUseCase::new(state.repo.clone(), state.config.clone())
        .execute(&id)
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: message.to_string(),
    }))
}
