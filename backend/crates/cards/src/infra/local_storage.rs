//! Key-Value Store Repository Implementation
//!
//! Cards live under [`CARDS_KEY`] as a JSON array. Entries are checked one
//! by one on load; only entries without an id are dropped.

use std::sync::Arc;

use platform::storage::{KeyValueStore, read_json, write_json};
use serde_json::Value;

use crate::domain::entity::card::Card;
use crate::domain::repository::CardRepository;
use crate::error::CardResult;

/// Storage key of the card list
pub const CARDS_KEY: &str = "vaultflow_cards";

pub struct LocalStorageCardRepository<S> {
    store: Arc<S>,
}

impl<S> LocalStorageCardRepository<S>
where
    S: KeyValueStore + Send + Sync,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> Clone for LocalStorageCardRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

/// Keep every entry with an id; see [`Card::from_stored`].
fn decode_cards(entries: Vec<Value>) -> Vec<Card> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let card = Card::from_stored(entry);
            if card.is_none() {
                tracing::warn!(index, "Discarding stored card without id");
            }
            card
        })
        .collect()
}

impl<S> CardRepository for LocalStorageCardRepository<S>
where
    S: KeyValueStore + Send + Sync,
{
    async fn list(&self) -> CardResult<Vec<Card>> {
        let entries: Option<Vec<Value>> = read_json(self.store.as_ref(), CARDS_KEY).await?;
        Ok(entries.map(decode_cards).unwrap_or_default())
    }

    async fn save_all(&self, cards: &[Card]) -> CardResult<()> {
        write_json(self.store.as_ref(), CARDS_KEY, &cards).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::card::CardDraft;
    use platform::storage::MemoryStore;
    use serde_json::json;

    fn repo() -> (Arc<MemoryStore>, LocalStorageCardRepository<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), LocalStorageCardRepository::new(store))
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let (_, repo) = repo();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_and_list_keeps_order() {
        let (_, repo) = repo();
        let first = Card::from_draft(CardDraft {
            name: "Primeiro".into(),
            ..Default::default()
        });
        let second = Card::from_draft(CardDraft {
            name: "Segundo".into(),
            ..Default::default()
        });

        repo.save_all(&[first.clone(), second.clone()]).await.unwrap();
        assert_eq!(repo.list().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_only_records_without_id_are_dropped() {
        let (store, repo) = repo();
        let raw = json!([
            {"id": "a", "name": "Valido"},
            {"name": "Sem id"},
            {"id": null, "name": "Id nulo"},
            {"id": "", "name": "Id vazio"},
            "nem-objeto",
            {"id": "b", "name": 42},
            {"id": "c", "name": "Outro valido"}
        ]);
        store
            .set_item(CARDS_KEY, raw.to_string())
            .await
            .unwrap();

        let ids: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|card| card.id.into_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_wrong_typed_card_survives_rewrite() {
        let (store, repo) = repo();
        let raw = json!([
            {"id": "a", "name": 42, "createdAt": "1/3/2024 09:00"},
            {"id": "b", "name": "Outro"}
        ]);
        store.set_item(CARDS_KEY, raw.to_string()).await.unwrap();

        let mut cards = repo.list().await.unwrap();
        cards.retain(|card| card.id.as_str() != "b");
        repo.save_all(&cards).await.unwrap();

        let stored: Value =
            serde_json::from_str(&store.get_item(CARDS_KEY).await.unwrap().unwrap()).unwrap();
        assert_eq!(
            stored,
            json!([{"id": "a", "name": 42, "createdAt": "1/3/2024 09:00"}])
        );
    }

    #[tokio::test]
    async fn test_corrupt_blob_is_empty() {
        let (store, repo) = repo();
        store
            .set_item(CARDS_KEY, "{não é json".to_string())
            .await
            .unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }
}
