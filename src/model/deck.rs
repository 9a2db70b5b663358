//! Ordered, non-empty card sequence for one review session.

use super::card::{Card, CardError, CardRecord};
use super::identifiers::CardId;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while building a deck.
///
/// All of these are detected at load time; a session never sees a
/// malformed or empty deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has zero cards; a session cannot start.
    #[error("deck contains no cards")]
    Empty,

    /// Two cards share the same id.
    #[error("duplicate card id `{0}`")]
    DuplicateId(CardId),

    /// A card record failed validation.
    #[error("card #{index} is malformed: {source}")]
    MalformedCard {
        /// Zero-based position of the record in the provider's output.
        index: usize,
        /// Why validation failed.
        #[source]
        source: CardError,
    },
}

/// Immutable ordered sequence of cards.
///
/// Invariant: non-empty, ids unique. Shuffling produces a new `Deck`
/// holding the same cards in a different order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from already validated cards.
    pub fn load(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }

        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.id()) {
                return Err(DeckError::DuplicateId(card.id().clone()));
            }
        }

        Ok(Self { cards })
    }

    /// Validate raw records, then build a deck from them.
    pub fn from_records(records: Vec<CardRecord>) -> Result<Self, DeckError> {
        let cards = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Card::try_from(record).map_err(|source| DeckError::MalformedCard { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::load(cards)
    }

    /// Return a uniformly random permutation of this deck.
    ///
    /// `SliceRandom::shuffle` is a Fisher-Yates shuffle, so every ordering
    /// is equally likely given an unbiased `rng`.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Cards in review order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Number of cards. Always at least one.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether a card with `id` is in the deck.
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.iter().any(|card| card.id() == id)
    }

    /// Card ids in review order.
    pub fn ids(&self) -> impl Iterator<Item = &CardId> {
        self.cards.iter().map(Card::id)
    }
}
