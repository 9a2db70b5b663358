//! Input dispatcher: maps learner input onto session transitions.
//!
//! The dispatcher is the only caller of [`ReviewSession::apply`] in the
//! application. It consults the session phase before routing, so that
//! input which makes no sense in the current phase (navigating while the
//! answer is showing, rating before the answer was seen) is ignored
//! instead of reaching the session as an illegal transition.
//!
//! Dispatch is synchronous. Each call runs the whole transition, including
//! the automatic advance after a rating, before returning; there is no
//! event queue.

use crate::model::{CardId, KeyAction};
use crate::state::session::{Outcome, Phase, ReviewSession, SessionAction, Signal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// A rating the learner just gave, ready for submission to a progress sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    /// Card that was rated.
    pub card_id: CardId,
    /// The rating given.
    pub outcome: Outcome,
}

/// What happened to one input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The event drove a session transition.
    Applied {
        /// Signal raised by the transition, if any.
        signal: Option<Signal>,
        /// Rating recorded by the transition, if any.
        rating: Option<Rating>,
    },
    /// Session input that is not meaningful in the current phase.
    Ignored,
    /// Not session input at all (quit, help); left to the caller.
    Unhandled,
}

/// Routing decision for an action in a given phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Apply this session action.
    Session(SessionAction),
    /// Session input that the current phase does not accept.
    Ignore,
    /// Not session input.
    Pass,
}

/// Decide which session action, if any, `action` maps to in `phase`.
pub fn route(action: KeyAction, phase: Phase) -> Route {
    match (action, phase) {
        (KeyAction::FlipToggle, Phase::Question) => Route::Session(SessionAction::Flip),
        (KeyAction::FlipToggle, Phase::Answer) => Route::Session(SessionAction::Hide),

        (KeyAction::NavigateNext, Phase::Question) => Route::Session(SessionAction::Next),
        (KeyAction::NavigatePrev, Phase::Question) => Route::Session(SessionAction::Prev),
        (KeyAction::NavigateNext | KeyAction::NavigatePrev, Phase::Answer) => Route::Ignore,

        (KeyAction::RatePositive, Phase::Answer) => Route::Session(SessionAction::MarkCompleted),
        (KeyAction::RateNegative, Phase::Answer) => {
            Route::Session(SessionAction::MarkNeedsReview)
        }
        (KeyAction::RatePositive | KeyAction::RateNegative, Phase::Question) => Route::Ignore,

        (KeyAction::Reset, _) => Route::Session(SessionAction::Reset),
        (KeyAction::Shuffle, _) => Route::Session(SessionAction::ShuffleAndReset),

        (KeyAction::Quit | KeyAction::Help, _) => Route::Pass,
    }
}

/// Routes input events to a review session.
///
/// Owns the random source used for shuffling so that tests can inject a
/// seeded generator.
#[derive(Debug, Clone)]
pub struct InputDispatcher<R = StdRng> {
    rng: R,
}

impl InputDispatcher<StdRng> {
    /// Dispatcher shuffling with an entropy-seeded generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for InputDispatcher<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> InputDispatcher<R> {
    /// Dispatcher shuffling with `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Process one input event to completion.
    pub fn dispatch(&mut self, session: &mut ReviewSession, action: KeyAction) -> Dispatch {
        let session_action = match route(action, session.phase()) {
            Route::Session(session_action) => session_action,
            Route::Ignore => {
                debug!(?action, phase = session.phase().as_str(), "Input ignored in this phase");
                return Dispatch::Ignored;
            }
            Route::Pass => return Dispatch::Unhandled,
        };

        let rated_card = session.current_card().id().clone();

        match session.apply(session_action, &mut self.rng) {
            Ok(signal) => {
                if let Some(signal) = signal {
                    info!(?signal, "Session signal emitted");
                }
                let rating = match session_action {
                    SessionAction::MarkCompleted => Some(Rating {
                        card_id: rated_card,
                        outcome: Outcome::Completed,
                    }),
                    SessionAction::MarkNeedsReview => Some(Rating {
                        card_id: rated_card,
                        outcome: Outcome::NeedsReview,
                    }),
                    _ => None,
                };
                Dispatch::Applied { signal, rating }
            }
            Err(err) => {
                // Routing checks the phase first, so this is a contract bug.
                warn!(error = %err, ?action, "Dispatcher produced an illegal transition");
                Dispatch::Ignored
            }
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
