//! Repository Traits

use crate::domain::entity::card::Card;
use crate::error::CardResult;

/// Stored card collection.
///
/// The collection is read and written whole; use cases apply their change in
/// memory between the two calls.
#[trait_variant::make(CardRepository: Send)]
pub trait LocalCardRepository {
    /// Every valid stored card, in insertion order
    async fn list(&self) -> CardResult<Vec<Card>>;

    /// Replace the stored collection
    async fn save_all(&self, cards: &[Card]) -> CardResult<()>;
}
