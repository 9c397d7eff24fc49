//! API DTOs
//!
//! Request bodies are the domain [`CardDraft`](crate::domain::CardDraft) and
//! [`CardPatch`](crate::domain::CardPatch) themselves.

use serde::Serialize;

use crate::domain::entity::card::Card;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardListResponse {
    pub success: bool,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    pub success: bool,
    pub card: Card,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
