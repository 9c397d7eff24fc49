//! List Cards Use Case

use std::sync::Arc;

use crate::application::config::CardConfig;
use crate::domain::entity::card::Card;
use crate::domain::repository::CardRepository;
use crate::error::CardResult;

pub struct ListCardsUseCase<R>
where
    R: CardRepository,
{
    repo: Arc<R>,
    config: Arc<CardConfig>,
}

impl<R> ListCardsUseCase<R>
where
    R: CardRepository + Sync,
{
    pub fn new(repo: Arc<R>, config: Arc<CardConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self) -> CardResult<Vec<Card>> {
        self.config.list_latency.wait().await;
        self.repo.list().await
    }
}
