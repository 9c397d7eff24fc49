//! Cards Backend Module
//!
//! Mock card-wallet CRUD over the shared key-value store.
//!
//! Clean Architecture structure:
//! - `domain/` - Card entity, draft/patch inputs, repository trait
//! - `application/` - Use cases and their delays
//! - `infra/` - Key-value store implementation
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CardConfig;
pub use error::{CardError, CardResult};
pub use infra::LocalStorageCardRepository;
pub use presentation::router::cards_router;
