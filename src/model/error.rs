//! Error types for the flashdeck application.
//!
//! Each layer owns a `thiserror` enum; they compose into [`AppError`] via
//! `From` so that `main` can use `?` throughout.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level wrapper
//!   - [`SourceError`] - card provider failures (file missing, bad JSON)
//!   - [`DeckError`] - empty deck, duplicate ids, malformed cards
//!   - `ConfigError` / `LoggingError` - startup failures
//!   - `TuiError` - terminal failures
//!
//! [`TransitionError`] is not part of `AppError`: an illegal
//! transition is a contract violation between the dispatcher and the
//! session. It is logged and dropped, never surfaced to the learner.
//! [`PersistenceError`] is likewise logged and dropped.

use crate::model::deck::DeckError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The card provider failed.
    #[error("Failed to load cards: {0}")]
    Source(#[from] SourceError),

    /// The provided cards do not form a valid deck.
    #[error("Invalid deck: {0}")]
    Deck(#[from] DeckError),

    /// The configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// File logging could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// The terminal failed during review.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Failures of a card provider. These are handled before a deck reaches a
/// session.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The deck file does not exist.
    #[error("Deck file not found: {path}")]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Reading the deck file failed.
    #[error("Failed to read deck file {path}: {source}")]
    Io {
        /// Deck file being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The deck file is not valid JSON.
    #[error("Invalid JSON in {path}: {source}")]
    InvalidJson {
        /// Deck file being parsed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but neither a card array nor a `{"response": [...]}` wrapper.
    #[error("Unexpected deck format in {path}: expected an array of cards")]
    UnexpectedShape {
        /// Deck file with the unexpected shape.
        path: PathBuf,
    },
}

/// Failures submitting a rating to a progress sink.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Opening or appending to the progress log failed.
    #[error("Failed to write progress log {path}: {source}")]
    Io {
        /// Progress log path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The record could not be encoded as JSON.
    #[error("Failed to serialize progress record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// An action was invoked in a phase that does not permit it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("illegal transition: `{action}` is not allowed while the {phase} is showing")]
    /// `action` is not valid in `phase`.
    Illegal {
        /// Name of the rejected action.
        action: &'static str,
        /// Side of the card that was showing.
        phase: &'static str,
    },
}
