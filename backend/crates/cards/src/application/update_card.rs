//! Update Card Use Case

use std::sync::Arc;

use crate::application::config::CardConfig;
use crate::domain::entity::card::{Card, CardPatch};
use crate::domain::repository::CardRepository;
use crate::error::{CardError, CardResult};

#[derive(Debug)]
pub struct UpdateCardOutput {
    pub card: Card,
    pub message: &'static str,
}

pub struct UpdateCardUseCase<R>
where
    R: CardRepository,
{
    repo: Arc<R>,
    config: Arc<CardConfig>,
}

impl<R> UpdateCardUseCase<R>
where
    R: CardRepository + Sync,
{
    pub fn new(repo: Arc<R>, config: Arc<CardConfig>) -> Self {
        Self { repo, config }
    }

    /// Merge `patch` over the stored card with the same id.
    pub async fn execute(&self, patch: CardPatch) -> CardResult<UpdateCardOutput> {
        self.config.update_latency.wait().await;

        let id = match patch.id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => return Err(CardError::MissingId),
        };

        let mut cards = self.repo.list().await?;
        let Some(card) = cards.iter_mut().find(|card| card.id.as_str() == id) else {
            return Err(CardError::NotFound { id });
        };

        card.apply(patch);
        let card = card.clone();
        self.repo.save_all(&cards).await?;

        tracing::info!(card_id = %card.id, "Card updated");

        Ok(UpdateCardOutput {
            card,
            message: "Cartão atualizado com sucesso!",
        })
    }
}
