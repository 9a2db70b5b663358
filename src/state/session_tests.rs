//! Tests for the review session state machine.

use super::*;
use crate::model::Category;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ===== Test Helpers =====

fn id(raw: &str) -> CardId {
    CardId::new(raw).expect("valid card id")
}

fn deck(ids: &[&str]) -> Deck {
    let cards = ids
        .iter()
        .map(|raw| Card::new(id(raw), format!("Q {raw}"), format!("A {raw}"), Category::General))
        .collect();
    Deck::load(cards).expect("non-empty deck")
}

fn session(ids: &[&str]) -> ReviewSession {
    ReviewSession::new(deck(ids))
}

fn ids(set: &HashSet<CardId>) -> Vec<String> {
    let mut out: Vec<String> = set.iter().map(|id| id.to_string()).collect();
    out.sort();
    out
}

// ===== Construction =====

#[test]
fn new_session_starts_on_first_card_with_answer_hidden() {
    let s = session(&["a", "b", "c"]);

    assert_eq!(s.position(), 0);
    assert!(!s.is_revealed());
    assert_eq!(s.phase(), Phase::Question);
    assert!(s.completed().is_empty());
    assert!(s.needs_review().is_empty());
    assert_eq!(s.current_card().id().as_str(), "a");
}

#[test]
fn view_exposes_card_reveal_position_and_total() {
    let mut s = session(&["a", "b"]);
    s.flip().expect("flip in question phase");

    let view = s.view();
    assert_eq!(view.card.id().as_str(), "a");
    assert!(view.revealed);
    assert_eq!(view.position, 0);
    assert_eq!(view.total, 2);
}

// ===== Flip / Hide =====

#[test]
fn flip_then_hide_restores_question_phase() {
    let mut s = session(&["a", "b"]);
    let before = s.clone();

    s.flip().expect("flip");
    assert_eq!(s.phase(), Phase::Answer);
    s.hide().expect("hide");

    assert_eq!(s, before);
}

#[test]
fn flip_while_revealed_is_illegal() {
    let mut s = session(&["a"]);
    s.flip().expect("first flip");

    let err = s.flip().expect_err("second flip should fail");
    assert_eq!(
        err,
        TransitionError::Illegal {
            action: "flip",
            phase: "answer"
        }
    );
    assert!(s.is_revealed());
}

#[test]
fn hide_while_hidden_is_illegal() {
    let mut s = session(&["a"]);
    assert!(s.hide().is_err());
    assert!(!s.is_revealed());
}

// ===== Navigation =====

#[test]
fn next_advances_and_keeps_answer_hidden() {
    let mut s = session(&["a", "b", "c"]);

    let signal = s.next_card().expect("next in question phase");

    assert_eq!(signal, None);
    assert_eq!(s.position(), 1);
    assert!(!s.is_revealed());
}

#[test]
fn next_on_last_card_signals_exhaustion_without_moving() {
    let mut s = session(&["a", "b"]);
    s.next_card().expect("to last");

    let signal = s.next_card().expect("next on last card");

    assert_eq!(signal, Some(Signal::DeckExhausted));
    assert_eq!(s.position(), 1);
}

#[test]
fn next_on_single_card_deck_signals_exhaustion() {
    let mut s = session(&["only"]);
    assert_eq!(s.next_card(), Ok(Some(Signal::DeckExhausted)));
    assert_eq!(s.position(), 0);
}

#[test]
fn next_while_revealed_is_illegal_and_does_not_move() {
    let mut s = session(&["a", "b"]);
    s.flip().expect("flip");
    let before = s.clone();

    let err = s.next_card().expect_err("navigation blocked in answer phase");

    assert_eq!(
        err,
        TransitionError::Illegal {
            action: "next",
            phase: "answer"
        }
    );
    assert_eq!(s, before);
}

#[test]
fn prev_moves_back_one_card() {
    let mut s = session(&["a", "b", "c"]);
    s.next_card().expect("next");
    s.next_card().expect("next");

    s.prev_card().expect("prev");

    assert_eq!(s.position(), 1);
    assert!(!s.is_revealed());
}

#[test]
fn prev_on_first_card_is_a_no_op() {
    let mut s = session(&["a", "b"]);
    let before = s.clone();

    s.prev_card().expect("prev on first card is legal");

    assert_eq!(s, before);
}

#[test]
fn prev_while_revealed_is_illegal_even_on_first_card() {
    let mut s = session(&["a", "b"]);
    s.flip().expect("flip");

    assert!(s.prev_card().is_err());
    assert!(s.is_revealed());
}

// ===== Marking =====

#[test]
fn mark_completed_records_and_advances() {
    let mut s = session(&["a", "b"]);
    s.flip().expect("flip");

    let signal = s.mark_completed().expect("mark in answer phase");

    assert_eq!(signal, None);
    assert_eq!(ids(s.completed()), ["a"]);
    assert_eq!(s.position(), 1);
    assert_eq!(s.phase(), Phase::Question);
}

#[test]
fn mark_needs_review_records_and_advances() {
    let mut s = session(&["a", "b"]);
    s.flip().expect("flip");

    s.mark_needs_review().expect("mark in answer phase");

    assert_eq!(ids(s.needs_review()), ["a"]);
    assert!(s.completed().is_empty());
    assert_eq!(s.position(), 1);
}

#[test]
fn marking_in_question_phase_is_illegal_and_records_nothing() {
    let mut s = session(&["a", "b"]);
    let before = s.clone();

    assert!(s.mark_completed().is_err());
    assert!(s.mark_needs_review().is_err());
    assert_eq!(s, before);
}

#[test]
fn marking_last_card_signals_exhaustion_and_stays_revealed() {
    let mut s = session(&["a"]);
    s.flip().expect("flip");

    let signal = s.mark_completed().expect("mark");

    assert_eq!(signal, Some(Signal::DeckExhausted));
    assert_eq!(s.position(), 0);
    assert!(s.is_revealed(), "exhausted advance changes nothing");
    assert_eq!(ids(s.completed()), ["a"]);
}

#[test]
fn remarking_moves_id_between_sets() {
    let mut s = session(&["a", "b"]);
    s.flip().expect("flip");
    s.mark_completed().expect("mark a completed");
    s.prev_card().expect("back to a");
    s.flip().expect("flip");

    s.mark_needs_review().expect("mark a needs review");

    assert!(s.completed().is_empty());
    assert_eq!(ids(s.needs_review()), ["a"]);
}

#[test]
fn marking_same_way_twice_is_idempotent_on_sets() {
    let mut s = session(&["a"]);
    s.flip().expect("flip");
    s.mark_completed().expect("first mark");

    // Still revealed on the last card, so marking again is legal.
    let signal = s.mark_completed().expect("second mark");

    assert_eq!(signal, Some(Signal::DeckExhausted));
    assert_eq!(ids(s.completed()), ["a"]);
    assert!(s.needs_review().is_empty());
}

#[test]
fn outcome_reports_recorded_rating() {
    let mut s = session(&["a", "b", "c"]);
    s.flip().expect("flip");
    s.mark_completed().expect("a");
    s.flip().expect("flip");
    s.mark_needs_review().expect("b");

    assert_eq!(s.outcome(&id("a")), Some(Outcome::Completed));
    assert_eq!(s.outcome(&id("b")), Some(Outcome::NeedsReview));
    assert_eq!(s.outcome(&id("c")), None);
}

// ===== Reset / Shuffle =====

#[test]
fn reset_clears_everything() {
    let mut s = session(&["a", "b", "c"]);
    s.flip().expect("flip");
    s.mark_completed().expect("a");
    s.flip().expect("flip");
    s.mark_needs_review().expect("b");
    s.flip().expect("flip");

    s.reset();

    assert_eq!(s.position(), 0);
    assert!(!s.is_revealed());
    assert!(s.completed().is_empty());
    assert!(s.needs_review().is_empty());
}

#[test]
fn shuffle_and_reset_keeps_cards_and_clears_progress() {
    let mut s = session(&["a", "b", "c", "d", "e"]);
    s.flip().expect("flip");
    s.mark_completed().expect("a");
    let mut rng = StdRng::seed_from_u64(3);

    let signal = s.shuffle_and_reset(&mut rng);

    assert_eq!(signal, Signal::DeckShuffled);
    assert_eq!(s.position(), 0);
    assert!(!s.is_revealed());
    assert!(s.completed().is_empty());
    let mut shuffled: Vec<String> = s.deck().ids().map(|id| id.to_string()).collect();
    shuffled.sort();
    assert_eq!(shuffled, ["a", "b", "c", "d", "e"]);
}

#[test]
fn shuffle_and_reset_is_legal_in_answer_phase() {
    let mut s = session(&["a", "b"]);
    s.flip().expect("flip");
    let mut rng = StdRng::seed_from_u64(9);

    let signal = s.apply(SessionAction::ShuffleAndReset, &mut rng);

    assert_eq!(signal, Ok(Some(Signal::DeckShuffled)));
    assert_eq!(s.phase(), Phase::Question);
}

// ===== apply / transition =====

#[test]
fn apply_error_leaves_session_untouched() {
    let mut s = session(&["a", "b"]);
    let before = s.clone();
    let mut rng = StdRng::seed_from_u64(0);

    let result = s.apply(SessionAction::Hide, &mut rng);

    assert!(result.is_err());
    assert_eq!(s, before);
}

#[test]
fn transition_walks_three_card_scenario() {
    let mut rng = StdRng::seed_from_u64(0);
    let s = session(&["A", "B", "C"]);

    let (s, _) = transition(&s, SessionAction::Flip, &mut rng).expect("flip A");
    let (s, signal) = transition(&s, SessionAction::MarkCompleted, &mut rng).expect("mark A");
    assert_eq!(signal, None);
    assert_eq!(s.position(), 1);
    assert_eq!(s.phase(), Phase::Question);
    assert_eq!(ids(s.completed()), ["A"]);

    let (s, _) = transition(&s, SessionAction::Flip, &mut rng).expect("flip B");
    let (s, _) = transition(&s, SessionAction::MarkNeedsReview, &mut rng).expect("mark B");
    assert_eq!(s.position(), 2);
    assert_eq!(ids(s.needs_review()), ["B"]);

    let (s, _) = transition(&s, SessionAction::Flip, &mut rng).expect("flip C");
    let (s, signal) = transition(&s, SessionAction::MarkCompleted, &mut rng).expect("mark C");
    assert_eq!(signal, Some(Signal::DeckExhausted));
    assert_eq!(s.position(), 2);
    assert_eq!(ids(s.completed()), ["A", "C"]);
    assert_eq!(ids(s.needs_review()), ["B"]);
}

#[test]
fn transition_propagates_illegal_action() {
    let mut rng = StdRng::seed_from_u64(0);
    let s = session(&["a"]);
    let result = transition(&s, SessionAction::MarkCompleted, &mut rng);
    assert!(matches!(result, Err(TransitionError::Illegal { .. })));
}

#[test]
fn transition_leaves_input_session_untouched() {
    let mut rng = StdRng::seed_from_u64(0);
    let s = session(&["a", "b"]);
    let before = s.clone();

    let (next, _) = transition(&s, SessionAction::Flip, &mut rng).expect("flip");
    assert!(next.is_revealed());
    assert_eq!(s, before);

    let failed = transition(&s, SessionAction::Hide, &mut rng);
    assert!(failed.is_err());
    assert_eq!(s, before);
}

#[test]
fn is_first_and_is_last_track_position() {
    let mut s = session(&["a", "b"]);
    assert!(s.is_first());
    assert!(!s.is_last());

    s.next_card().expect("next");
    assert!(!s.is_first());
    assert!(s.is_last());

    s.prev_card().expect("prev");
    assert!(s.is_first());
}
