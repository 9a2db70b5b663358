//! Identifier newtypes with smart constructors.
//!
//! Identifiers validate non-blank strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::Serialize;
use std::fmt;

/// Identifier of a card, unique within a deck.
///
/// Backends may emit numeric ids; those are stringified before construction
/// so that every id compares as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Smart constructor: rejects empty or whitespace-only ids.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidCardId> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidCardId::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The trimmed identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Reasons a raw identifier is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCardId {
    /// Empty or whitespace only.
    #[error("Card ID cannot be empty")]
    Empty,
}

// ===== Tests =====
