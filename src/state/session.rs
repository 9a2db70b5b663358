//! Review session state machine.
//!
//! A session walks a [`Deck`] one card at a time. Each card is shown in
//! one of two phases:
//!
//! - **Question** (`revealed == false`): the learner may flip the card or
//!   navigate to a neighbouring card.
//! - **Answer** (`revealed == true`): the learner may hide the answer again
//!   or rate the card, which records the outcome and advances.
//!
//! Navigation is only legal in the Question phase and rating only in the
//! Answer phase. Calling an action in the wrong phase returns
//! [`TransitionError::Illegal`] and leaves the session untouched.
//!
//! # Invariants
//!
//! - `position < deck.len()`
//! - `completed` and `needs_review` are disjoint

use crate::model::{Card, CardId, Deck, TransitionError};
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Which side of the current card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Answer hidden.
    Question,
    /// Answer revealed.
    Answer,
}

impl Phase {
    /// Lowercase name, used in logs and errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Question => "question",
            Phase::Answer => "answer",
        }
    }
}

/// Discrete notification emitted by a transition, for UI toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// `next` was requested on the last card.
    DeckExhausted,
    /// The deck was reshuffled and progress cleared.
    DeckShuffled,
}

/// The learner's self-rating of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// "Knew it".
    Completed,
    /// "Didn't know it".
    NeedsReview,
}

/// Every transition the session accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Reveal the answer.
    Flip,
    /// Hide the answer again.
    Hide,
    /// Move to the next card.
    Next,
    /// Move to the previous card.
    Prev,
    /// Rate the card as known and advance.
    MarkCompleted,
    /// Rate the card as needing review and advance.
    MarkNeedsReview,
    /// Clear progress and return to the first card.
    Reset,
    /// Reorder the deck, then reset.
    ShuffleAndReset,
}

impl SessionAction {
    /// Snake-case name, used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            SessionAction::Flip => "flip",
            SessionAction::Hide => "hide",
            SessionAction::Next => "next",
            SessionAction::Prev => "prev",
            SessionAction::MarkCompleted => "mark_completed",
            SessionAction::MarkNeedsReview => "mark_needs_review",
            SessionAction::Reset => "reset",
            SessionAction::ShuffleAndReset => "shuffle_and_reset",
        }
    }
}

/// Render-ready snapshot of the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView<'a> {
    /// Card at the current position.
    pub card: &'a Card,
    /// Whether the answer is showing.
    pub revealed: bool,
    /// Zero-based position in the deck.
    pub position: usize,
    /// Number of cards in the deck.
    pub total: usize,
}

/// Review session. Owns the deck ordering and the per-card outcome sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSession {
    deck: Deck,
    position: usize,
    revealed: bool,
    completed: HashSet<CardId>,
    needs_review: HashSet<CardId>,
}

impl ReviewSession {
    /// Start a session on the first card, answer hidden, nothing rated.
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            position: 0,
            revealed: false,
            completed: HashSet::new(),
            needs_review: HashSet::new(),
        }
    }

    /// The deck in its current order.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Zero-based index of the current card.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of cards in the deck.
    pub fn total(&self) -> usize {
        self.deck.len()
    }

    /// Whether the answer of the current card is showing.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Phase derived from `is_revealed`.
    pub fn phase(&self) -> Phase {
        if self.revealed {
            Phase::Answer
        } else {
            Phase::Question
        }
    }

    /// Whether the current card is the first one.
    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    /// Whether the current card is the last one.
    pub fn is_last(&self) -> bool {
        self.position + 1 == self.deck.len()
    }

    /// The card at the current position.
    pub fn current_card(&self) -> &Card {
        &self.deck.cards()[self.position]
    }

    /// Snapshot of what the front end should draw.
    pub fn view(&self) -> CardView<'_> {
        CardView {
            card: self.current_card(),
            revealed: self.revealed,
            position: self.position,
            total: self.total(),
        }
    }

    /// Ids rated as known.
    pub fn completed(&self) -> &HashSet<CardId> {
        &self.completed
    }

    /// Ids rated as needing review.
    pub fn needs_review(&self) -> &HashSet<CardId> {
        &self.needs_review
    }

    /// Recorded outcome for `id`, if the learner has rated it.
    pub fn outcome(&self, id: &CardId) -> Option<Outcome> {
        if self.completed.contains(id) {
            Some(Outcome::Completed)
        } else if self.needs_review.contains(id) {
            Some(Outcome::NeedsReview)
        } else {
            None
        }
    }

    // ===== Transitions =====

    /// Reveal the answer.
    pub fn flip(&mut self) -> Result<(), TransitionError> {
        self.require(Phase::Question, SessionAction::Flip)?;
        self.revealed = true;
        Ok(())
    }

    /// Hide the answer again.
    pub fn hide(&mut self) -> Result<(), TransitionError> {
        self.require(Phase::Answer, SessionAction::Hide)?;
        self.revealed = false;
        Ok(())
    }

    /// Move to the next card.
    ///
    /// On the last card nothing changes and `DeckExhausted` is returned.
    pub fn next_card(&mut self) -> Result<Option<Signal>, TransitionError> {
        self.require(Phase::Question, SessionAction::Next)?;
        Ok(self.advance())
    }

    /// Move to the previous card. No-op on the first card.
    pub fn prev_card(&mut self) -> Result<(), TransitionError> {
        self.require(Phase::Question, SessionAction::Prev)?;
        if !self.is_first() {
            self.position -= 1;
            self.revealed = false;
        }
        Ok(())
    }

    /// Record the current card as known, then advance.
    pub fn mark_completed(&mut self) -> Result<Option<Signal>, TransitionError> {
        self.require(Phase::Answer, SessionAction::MarkCompleted)?;
        let id = self.current_card().id().clone();
        self.needs_review.remove(&id);
        self.completed.insert(id);
        Ok(self.advance())
    }

    /// Record the current card as needing review, then advance.
    pub fn mark_needs_review(&mut self) -> Result<Option<Signal>, TransitionError> {
        self.require(Phase::Answer, SessionAction::MarkNeedsReview)?;
        let id = self.current_card().id().clone();
        self.completed.remove(&id);
        self.needs_review.insert(id);
        Ok(self.advance())
    }

    /// Return to the first card and forget every rating.
    pub fn reset(&mut self) {
        self.position = 0;
        self.revealed = false;
        self.completed.clear();
        self.needs_review.clear();
    }

    /// Adopt a freshly shuffled ordering of the deck, then reset.
    pub fn shuffle_and_reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Signal {
        self.deck = self.deck.shuffled(rng);
        self.reset();
        Signal::DeckShuffled
    }

    /// Apply any action. Single entry point used by the input dispatcher.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        action: SessionAction,
        rng: &mut R,
    ) -> Result<Option<Signal>, TransitionError> {
        let signal = match action {
            SessionAction::Flip => self.flip().map(|()| None)?,
            SessionAction::Hide => self.hide().map(|()| None)?,
            SessionAction::Next => self.next_card()?,
            SessionAction::Prev => self.prev_card().map(|()| None)?,
            SessionAction::MarkCompleted => self.mark_completed()?,
            SessionAction::MarkNeedsReview => self.mark_needs_review()?,
            SessionAction::Reset => {
                self.reset();
                None
            }
            SessionAction::ShuffleAndReset => Some(self.shuffle_and_reset(rng)),
        };

        debug!(
            action = action.name(),
            position = self.position,
            revealed = self.revealed,
            completed = self.completed.len(),
            needs_review = self.needs_review.len(),
            ?signal,
            "Session transition applied"
        );

        Ok(signal)
    }

    // ===== Internals =====

    fn require(&self, phase: Phase, action: SessionAction) -> Result<(), TransitionError> {
        if self.phase() == phase {
            Ok(())
        } else {
            Err(TransitionError::Illegal {
                action: action.name(),
                phase: self.phase().as_str(),
            })
        }
    }

    /// Step forward one card, or signal exhaustion on the last card.
    ///
    /// At the last card the state is left exactly as it was, including
    /// `revealed`.
    fn advance(&mut self) -> Option<Signal> {
        if self.is_last() {
            return Some(Signal::DeckExhausted);
        }
        self.position += 1;
        self.revealed = false;
        None
    }
}

/// Pure transition function: `(session, action) -> session`.
///
/// `session` is only read; the result is a new session.
pub fn transition<R: Rng + ?Sized>(
    session: &ReviewSession,
    action: SessionAction,
    rng: &mut R,
) -> Result<(ReviewSession, Option<Signal>), TransitionError> {
    let mut next = session.clone();
    let signal = next.apply(action, rng)?;
    Ok((next, signal))
}

// ===== Tests =====

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
