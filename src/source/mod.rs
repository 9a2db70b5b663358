//! Card sources.
//!
//! This module provides card providers keyed by category:
//! - Built-in sample decks (always available, no I/O)
//! - JSON deck files
//! - Unified CardSource enum for both
//!
//! Providers hand over unvalidated [`CardRecord`]s. Validation happens in
//! [`Deck::from_records`], so malformed cards are rejected before a session
//! starts.

use crate::model::{CardRecord, Category, Deck, SourceError};
use std::path::PathBuf;
use tracing::info;

pub mod builtin;
pub mod file;

pub use builtin::BuiltinProvider;
pub use file::JsonFileProvider;

/// Something that can supply the cards of one category.
pub trait CardProvider {
    /// Fetch the raw cards for `category`, in load order.
    fn fetch(&self, category: Category) -> Result<Vec<CardRecord>, SourceError>;
}

/// Unified card source.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone)]
pub enum CardSource {
    /// Sample decks compiled into the binary.
    Builtin(BuiltinProvider),
    /// Cards read from a JSON file.
    File(JsonFileProvider),
}

impl CardProvider for CardSource {
    fn fetch(&self, category: Category) -> Result<Vec<CardRecord>, SourceError> {
        match self {
            CardSource::Builtin(p) => p.fetch(category),
            CardSource::File(p) => p.fetch(category),
        }
    }
}

/// Pick a source: the deck file when one is given, built-in decks otherwise.
pub fn detect_card_source(deck_path: Option<PathBuf>) -> CardSource {
    match deck_path {
        Some(path) => CardSource::File(JsonFileProvider::new(path)),
        None => CardSource::Builtin(BuiltinProvider),
    }
}

/// Errors from [`load_deck`]: either the source failed or the cards did.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The provider failed.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The cards did not form a valid deck.
    #[error(transparent)]
    Deck(#[from] crate::model::DeckError),
}

impl From<LoadError> for crate::model::AppError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Source(e) => e.into(),
            LoadError::Deck(e) => e.into(),
        }
    }
}

/// Fetch and validate the deck for `category`.
pub fn load_deck(provider: &impl CardProvider, category: Category) -> Result<Deck, LoadError> {
    let records = provider.fetch(category)?;
    info!(category = %category, cards = records.len(), "Fetched cards");
    Ok(Deck::from_records(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeckError;

    struct FixedProvider(Vec<CardRecord>);

    impl CardProvider for FixedProvider {
        fn fetch(&self, _category: Category) -> Result<Vec<CardRecord>, SourceError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn detect_card_source_prefers_deck_file() {
        let source = detect_card_source(Some(PathBuf::from("deck.json")));
        assert!(matches!(source, CardSource::File(_)));
    }

    #[test]
    fn detect_card_source_falls_back_to_builtin() {
        let source = detect_card_source(None);
        assert!(matches!(source, CardSource::Builtin(_)));
    }

    #[test]
    fn load_deck_from_builtin_general() {
        let deck = load_deck(&BuiltinProvider, Category::General).expect("builtin deck");
        assert_eq!(deck.len(), 5);
    }

    #[test]
    fn load_deck_rejects_empty_provider_output() {
        let result = load_deck(&FixedProvider(Vec::new()), Category::General);
        assert!(matches!(result, Err(LoadError::Deck(DeckError::Empty))));
    }

    #[test]
    fn load_deck_rejects_malformed_card() {
        let records = vec![CardRecord {
            question: Some("Q".to_string()),
            ..CardRecord::default()
        }];
        let result = load_deck(&FixedProvider(records), Category::General);
        assert!(matches!(
            result,
            Err(LoadError::Deck(DeckError::MalformedCard { index: 0, .. }))
        ));
    }
}
