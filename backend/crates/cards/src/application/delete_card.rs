//! Delete Card Use Case

use std::sync::Arc;

use crate::application::config::CardConfig;
use crate::domain::repository::CardRepository;
use crate::error::{CardError, CardResult};

pub struct DeleteCardUseCase<R>
where
    R: CardRepository,
{
    repo: Arc<R>,
    config: Arc<CardConfig>,
}

impl<R> DeleteCardUseCase<R>
where
    R: CardRepository + Sync,
{
    pub fn new(repo: Arc<R>, config: Arc<CardConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, id: &str) -> CardResult<&'static str> {
        self.config.delete_latency.wait().await;

        if id.is_empty() {
            return Err(CardError::InvalidId);
        }

        let mut cards = self.repo.list().await?;
        let before = cards.len();
        cards.retain(|card| card.id.as_str() != id);

        if cards.len() == before {
            return Err(CardError::NotFound { id: id.to_string() });
        }

        self.repo.save_all(&cards).await?;

        tracing::info!(card_id = id, "Card deleted");
        Ok("Cartão removido com sucesso.")
    }
}
