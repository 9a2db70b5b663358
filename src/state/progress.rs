//! Progress view model derived from a review session.
//!
//! Holds no state of its own: every value is computed from the session on
//! demand, so it can never disagree with it.

use crate::model::CardId;
use crate::state::session::ReviewSession;

/// Display status of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    /// Rated as known.
    Completed,
    /// Rated as needing review.
    NeedsReview,
    /// Not rated yet.
    Pending,
}

/// Presentation-ready progress metrics over a borrowed session.
#[derive(Debug, Clone, Copy)]
pub struct ProgressView<'a> {
    session: &'a ReviewSession,
}

impl<'a> ProgressView<'a> {
    /// Progress over `session`.
    pub fn new(session: &'a ReviewSession) -> Self {
        Self { session }
    }

    /// Number of cards in the deck.
    pub fn total(&self) -> usize {
        self.session.total()
    }

    /// 1-based number of the card being shown.
    pub fn card_number(&self) -> usize {
        self.session.position() + 1
    }

    /// Cards rated as known.
    pub fn completed_count(&self) -> usize {
        self.session.completed().len()
    }

    /// Cards rated as needing review.
    pub fn needs_review_count(&self) -> usize {
        self.session.needs_review().len()
    }

    /// Cards with any outcome. The sets are disjoint, so this is the size
    /// of their union.
    pub fn reviewed_count(&self) -> usize {
        self.completed_count() + self.needs_review_count()
    }

    /// Cards not rated yet.
    pub fn pending_count(&self) -> usize {
        self.total() - self.reviewed_count()
    }

    /// `round(100 * reviewed / total)`, rounding halves up.
    pub fn percent(&self) -> u8 {
        rounded_percent(self.reviewed_count(), self.total())
    }

    /// Status of `id`. Ids not in the deck report `Pending`.
    pub fn card_status(&self, id: &CardId) -> CardStatus {
        if self.session.completed().contains(id) {
            CardStatus::Completed
        } else if self.session.needs_review().contains(id) {
            CardStatus::NeedsReview
        } else {
            CardStatus::Pending
        }
    }

    /// "Card 2 of 5"
    pub fn position_label(&self) -> String {
        format!("Card {} of {}", self.card_number(), self.total())
    }

    /// "1 completed, 3 need review"
    pub fn tally_label(&self) -> String {
        format!(
            "{} completed, {} need review",
            self.completed_count(),
            self.needs_review_count()
        )
    }
}

/// Integer round-half-up of `100 * part / whole`. Zero when `whole` is zero.
pub fn rounded_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole);
    ((200 * part + whole) / (2 * whole)) as u8
}
