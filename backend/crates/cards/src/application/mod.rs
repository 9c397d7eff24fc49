//! Application Layer
//!
//! Card use cases. Each one waits for its configured delay, then reads the
//! whole collection, changes it in memory and writes it back.

pub mod config;
pub mod create_card;
pub mod delete_card;
pub mod list_cards;
pub mod update_card;

// Re-exports
pub use config::CardConfig;
pub use create_card::{CreateCardOutput, CreateCardUseCase};
pub use delete_card::DeleteCardUseCase;
pub use list_cards::ListCardsUseCase;
pub use update_card::{UpdateCardOutput, UpdateCardUseCase};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::card::{CardDraft, CardPatch};
    use crate::error::CardError;
    use crate::infra::LocalStorageCardRepository;
    use platform::storage::MemoryStore;
    use std::sync::Arc;

    type Repo = LocalStorageCardRepository<MemoryStore>;

    struct Service {
        list: ListCardsUseCase<Repo>,
        create: CreateCardUseCase<Repo>,
        update: UpdateCardUseCase<Repo>,
        delete: DeleteCardUseCase<Repo>,
    }

    fn service() -> Service {
        let repo = Arc::new(LocalStorageCardRepository::new(Arc::new(MemoryStore::new())));
        let config = Arc::new(CardConfig::instant());
        Service {
            list: ListCardsUseCase::new(repo.clone(), config.clone()),
            create: CreateCardUseCase::new(repo.clone(), config.clone()),
            update: UpdateCardUseCase::new(repo.clone(), config.clone()),
            delete: DeleteCardUseCase::new(repo, config),
        }
    }

    fn draft(name: &str) -> CardDraft {
        CardDraft {
            name: name.to_string(),
            network: Some("visa".into()),
            card_type: Some("debit".into()),
            color: Some("#1a1a1a".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let svc = service();
        let out = svc.create.execute(draft("Itaú Black")).await.unwrap();
        assert_eq!(out.message, "Cartão cadastrado com sucesso!");
        assert!(!out.card.id.as_str().is_empty());
        assert!(out.card.created_at.is_some());

        let cards = svc.list.execute().await.unwrap();
        assert_eq!(cards, vec![out.card]);
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let svc = service();
        let a = svc.create.execute(draft("A")).await.unwrap().card;
        let b = svc.create.execute(draft("B")).await.unwrap().card;
        assert_ne!(a.id, b.id);
        assert_eq!(svc.list.execute().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let svc = service();
        let card = svc.create.execute(draft("Itaú")).await.unwrap().card;

        let out = svc
            .update
            .execute(CardPatch {
                id: Some(card.id.to_string()),
                name: Some("Itaú Personnalité".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(out.message, "Cartão atualizado com sucesso!");
        assert_eq!(out.card.name, "Itaú Personnalité");
        assert_eq!(out.card.network, card.network);
        assert_eq!(out.card.created_at, card.created_at);
        assert_eq!(svc.list.execute().await.unwrap(), vec![out.card]);
    }

    #[tokio::test]
    async fn test_update_without_id() {
        let svc = service();
        for id in [None, Some(String::new())] {
            let err = svc
                .update
                .execute(CardPatch {
                    id,
                    ..Default::default()
                })
                .await
                .unwrap_err();
            assert!(matches!(err, CardError::MissingId));
            assert_eq!(
                err.to_string(),
                "ID do cartão é obrigatório para atualização."
            );
        }
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let svc = service();
        svc.create.execute(draft("Existente")).await.unwrap();

        let err = svc
            .update
            .execute(CardPatch {
                id: Some("nao-existe".into()),
                name: Some("X".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Cartão não encontrado.");
        assert_eq!(svc.list.execute().await.unwrap()[0].name, "Existente");
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let svc = service();
        let keep = svc.create.execute(draft("Fica")).await.unwrap().card;
        let gone = svc.create.execute(draft("Sai")).await.unwrap().card;

        let message = svc.delete.execute(gone.id.as_str()).await.unwrap();
        assert_eq!(message, "Cartão removido com sucesso.");
        assert_eq!(svc.list.execute().await.unwrap(), vec![keep]);

        let err = svc.delete.execute(gone.id.as_str()).await.unwrap_err();
        assert!(matches!(err, CardError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_empty_id() {
        let err = service().delete.execute("").await.unwrap_err();
        assert_eq!(err.to_string(), "ID do cartão inválido.");
    }
}
