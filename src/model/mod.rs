//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod card;
pub mod deck;
pub mod error;
pub mod identifiers;
pub mod key_action;

// Re-export for convenience
pub use card::{Card, CardError, CardRecord, Category, Difficulty};
pub use deck::{Deck, DeckError};
pub use error::{AppError, PersistenceError, SourceError, TransitionError};
pub use identifiers::{CardId, InvalidCardId};
pub use key_action::KeyAction;
