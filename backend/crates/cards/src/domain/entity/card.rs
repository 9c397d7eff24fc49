//! Card Entity
//!
//! A payment card saved in the wallet. Only display data is kept; there is
//! no card number or security code.

use chrono::{DateTime, Utc};
use kernel::id::CardId;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON fields owned by the store. Drafts and patches never set them.
const RESERVED_FIELDS: [&str; 2] = ["id", "createdAt"];

/// Fields with a typed slot on [`Card`], besides `id`.
const KNOWN_FIELDS: [&str; 5] = ["name", "network", "type", "color", "createdAt"];

/// Stored card.
///
/// Fields the front end adds beyond the known ones are kept in `extra` and
/// written back unchanged. So are known fields holding a value of an
/// unexpected type; their typed slot then stays empty and is not written.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Card {
    /// New card with a fresh id, stamped now.
    pub fn from_draft(draft: CardDraft) -> Self {
        Self::from_draft_at(draft, CardId::generate(), Utc::now())
    }

    pub fn from_draft_at(draft: CardDraft, id: CardId, created_at: DateTime<Utc>) -> Self {
        let CardDraft {
            name,
            network,
            card_type,
            color,
            extra,
        } = draft;

        Self {
            id,
            name,
            network,
            card_type,
            color,
            created_at: Some(created_at),
            extra: without_reserved(extra),
        }
    }

    /// Decode a stored entry.
    ///
    /// Only a missing, null or empty `id` rejects the entry. A numeric id is
    /// kept as its decimal text.
    pub fn from_stored(entry: Value) -> Option<Self> {
        let Value::Object(mut fields) = entry else {
            return None;
        };

        let id = match fields.remove("id") {
            Some(Value::String(id)) => id,
            Some(Value::Number(n)) => n.to_string(),
            _ => return None,
        };
        let id = CardId::parse(id).ok()?;

        let mut card = Self {
            id,
            name: String::new(),
            network: None,
            card_type: None,
            color: None,
            created_at: None,
            extra: Map::new(),
        };

        for (key, value) in fields {
            let typed = match (key.as_str(), &value) {
                ("name", Value::String(v)) => {
                    card.name = v.clone();
                    true
                }
                ("network", Value::String(v)) => {
                    card.network = Some(v.clone());
                    true
                }
                ("type", Value::String(v)) => {
                    card.card_type = Some(v.clone());
                    true
                }
                ("color", Value::String(v)) => {
                    card.color = Some(v.clone());
                    true
                }
                ("createdAt", Value::String(v)) => match DateTime::parse_from_rfc3339(v) {
                    Ok(at) => {
                        card.created_at = Some(at.with_timezone(&Utc));
                        true
                    }
                    Err(_) => false,
                },
                (field, Value::Null) => KNOWN_FIELDS.contains(&field),
                _ => false,
            };

            if !typed {
                card.extra.insert(key, value);
            }
        }

        Some(card)
    }

    /// Overlay the fields present in `patch`.
    pub fn apply(&mut self, patch: CardPatch) {
        if let Some(name) = patch.name {
            self.extra.remove("name");
            self.name = name;
        }
        if let Some(network) = patch.network {
            self.extra.remove("network");
            self.network = Some(network);
        }
        if let Some(card_type) = patch.card_type {
            self.extra.remove("type");
            self.card_type = Some(card_type);
        }
        if let Some(color) = patch.color {
            self.extra.remove("color");
            self.color = Some(color);
        }
        self.extra.extend(without_reserved(patch.extra));
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Card::from_stored(value).ok_or_else(|| de::Error::custom("card requires a non-empty id"))
    }
}

/// Data for a new card
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDraft {
    #[serde(default)]
    pub name: String,
    pub network: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub color: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial update; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPatch {
    /// Target card
    pub id: Option<String>,
    pub name: Option<String>,
    pub network: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub color: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn without_reserved(mut extra: Map<String, Value>) -> Map<String, Value> {
    for field in RESERVED_FIELDS {
        extra.remove(field);
    }
    extra
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> CardDraft {
        CardDraft {
            name: "Nubank Roxinho".into(),
            network: Some("mastercard".into()),
            card_type: Some("credit".into()),
            color: Some("#820ad1".into()),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_json_shape() {
        let created = "2024-03-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let card = Card::from_draft_at(draft(), CardId::parse("c1").unwrap(), created);

        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "c1",
                "name": "Nubank Roxinho",
                "network": "mastercard",
                "type": "credit",
                "color": "#820ad1",
                "createdAt": "2024-03-01T12:00:00Z",
            })
        );
    }

    #[test]
    fn test_extra_fields_preserved() {
        let raw = json!({"id": "c1", "name": "Inter", "lastDigits": "4321"});
        let card: Card = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(card.extra.get("lastDigits"), Some(&json!("4321")));
        assert_eq!(serde_json::to_value(&card).unwrap(), raw);
    }

    #[test]
    fn test_wrong_typed_fields_survive_round_trip() {
        let raw = json!({
            "id": "c1",
            "name": 42,
            "color": ["#fff"],
            "createdAt": "01/03/2024, 09:00:00"
        });
        let card = Card::from_stored(raw.clone()).unwrap();

        assert_eq!(card.name, "");
        assert_eq!(card.color, None);
        assert_eq!(card.created_at, None);
        assert_eq!(serde_json::to_value(&card).unwrap(), raw);
    }

    #[test]
    fn test_null_known_fields_read_as_empty() {
        let card = Card::from_stored(json!({"id": "c1", "name": null, "network": null})).unwrap();
        assert_eq!(card.name, "");
        assert_eq!(card.network, None);
        assert!(card.extra.is_empty());
    }

    #[test]
    fn test_only_missing_id_rejects() {
        assert!(Card::from_stored(json!({"name": "Sem id"})).is_none());
        assert!(Card::from_stored(json!({"id": null})).is_none());
        assert!(Card::from_stored(json!({"id": ""})).is_none());
        assert!(Card::from_stored(json!("texto")).is_none());
        assert_eq!(
            Card::from_stored(json!({"id": 17})).unwrap().id.as_str(),
            "17"
        );
    }

    #[test]
    fn test_draft_cannot_set_reserved_fields() {
        let draft: CardDraft =
            serde_json::from_value(json!({"name": "Inter", "id": "forjado", "createdAt": "ontem"}))
                .unwrap();
        let card = Card::from_draft(draft);

        assert_ne!(card.id.as_str(), "forjado");
        assert!(card.created_at.is_some());
        assert!(card.extra.is_empty());
    }

    #[test]
    fn test_apply_patch_keeps_identity() {
        let created = Utc::now();
        let mut card = Card::from_draft_at(draft(), CardId::parse("c1").unwrap(), created);

        let patch: CardPatch = serde_json::from_value(
            json!({"id": "c1", "color": "#000000", "createdAt": "2000-01-01T00:00:00Z", "apelido": "principal"}),
        )
        .unwrap();
        card.apply(patch);

        assert_eq!(card.id.as_str(), "c1");
        assert_eq!(card.created_at, Some(created));
        assert_eq!(card.color.as_deref(), Some("#000000"));
        assert_eq!(card.name, "Nubank Roxinho");
        assert_eq!(card.extra.get("apelido"), Some(&json!("principal")));
    }

    #[test]
    fn test_patch_replaces_wrong_typed_value() {
        let mut card = Card::from_stored(json!({"id": "c1", "name": 42})).unwrap();
        card.apply(CardPatch {
            name: Some("Inter".into()),
            ..Default::default()
        });

        assert_eq!(
            serde_json::to_value(&card).unwrap(),
            json!({"id": "c1", "name": "Inter"})
        );
    }
}
