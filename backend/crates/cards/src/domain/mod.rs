//! Domain Layer

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::card::{Card, CardDraft, CardPatch};
pub use repository::CardRepository;
