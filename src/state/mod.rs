//! Review state machine (pure).
//!
//! All state transitions are synchronous and testable without a TUI.

pub mod dispatcher;
pub mod progress;
pub mod session;

// Re-export for convenience
pub use dispatcher::{route, Dispatch, InputDispatcher, Rating, Route};
pub use progress::{rounded_percent, CardStatus, ProgressView};
pub use session::{
    transition, CardView, Outcome, Phase, ReviewSession, SessionAction, Signal,
};
