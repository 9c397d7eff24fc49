//! Create Card Use Case

use std::sync::Arc;

use crate::application::config::CardConfig;
use crate::domain::entity::card::{Card, CardDraft};
use crate::domain::repository::CardRepository;
use crate::error::CardResult;

#[derive(Debug)]
pub struct CreateCardOutput {
    pub card: Card,
    pub message: &'static str,
}

pub struct CreateCardUseCase<R>
where
    R: CardRepository,
{
    repo: Arc<R>,
    config: Arc<CardConfig>,
}

impl<R> CreateCardUseCase<R>
where
    R: CardRepository + Sync,
{
    pub fn new(repo: Arc<R>, config: Arc<CardConfig>) -> Self {
        Self { repo, config }
    }

    /// Append a new card with a generated id and the current timestamp.
    pub async fn execute(&self, draft: CardDraft) -> CardResult<CreateCardOutput> {
        self.config.create_latency.wait().await;

        let card = Card::from_draft(draft);
        let mut cards = self.repo.list().await?;
        cards.push(card.clone());
        self.repo.save_all(&cards).await?;

        tracing::info!(card_id = %card.id, name = %card.name, "Card created");

        Ok(CreateCardOutput {
            card,
            message: "Cartão cadastrado com sucesso!",
        })
    }
}
