//! Typed Record IDs
//!
//! Identifiers of stored records. New ids are UUID v4 strings, but ids read
//! back from storage are arbitrary non-empty strings (older front-end builds
//! generated base-36 ids), so the value is kept as text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("identifier cannot be empty")]
    Empty,
}

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{RecordId, markers};
/// type CardId = RecordId<markers::Card>;
/// let id = CardId::generate();
/// assert!(!id.as_str().is_empty());
/// ```
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId<T> {
    value: String,
    #[serde(skip)]
    _marker: PhantomData<fn() -> T>,
}

impl<T> RecordId<T> {
    /// New random id (UUID v4, hyphenated)
    pub fn generate() -> Self {
        Self {
            value: Uuid::new_v4().to_string(),
            _marker: PhantomData,
        }
    }

    /// Wrap an existing id; blank input is rejected.
    pub fn parse(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

// Manual impls: derives would require `T: Clone` etc. on the marker.
impl<T> Clone for RecordId<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for RecordId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for RecordId<T> {}

impl<T> std::hash::Hash for RecordId<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for RecordId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.value)
    }
}

impl<T> fmt::Display for RecordId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> AsRef<str> for RecordId<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    pub struct Card;
}

pub type CardId = RecordId<markers::Card>;
