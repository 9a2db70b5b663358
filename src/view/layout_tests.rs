//! Tests for review layout and hit testing.

use super::*;
use crate::model::Category;
use crate::source::{load_deck, BuiltinProvider};
use crate::view::styles::ColorConfig;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

fn builtin_session() -> ReviewSession {
    let deck = load_deck(&BuiltinProvider, Category::General).expect("builtin deck");
    ReviewSession::new(deck)
}

fn frame_area() -> Rect {
    Rect::new(0, 0, 80, 24)
}

fn render_to_string(session: &ReviewSession, notification: Option<&str>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
    let styles = CardStyles::with_color_config(ColorConfig::fixed(false));
    let key_hints = status_hints(&KeyBindings::default());
    terminal
        .draw(|frame| {
            let layout = calculate_layout(frame.area());
            render_layout(
                frame,
                &layout,
                session,
                ScreenContext {
                    styles: &styles,
                    notification,
                    key_hints: &key_hints,
                },
            );
        })
        .expect("draw");

    let buffer = terminal.backend().buffer();
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        result.push('\n');
    }
    result
}

// ===== calculate_layout =====

#[test]
fn layout_stacks_areas_top_to_bottom() {
    let layout = calculate_layout(frame_area());

    assert_eq!(layout.header, Rect::new(0, 0, 80, 1));
    assert_eq!(layout.progress, Rect::new(0, 1, 80, 2));
    assert_eq!(layout.card, Rect::new(0, 3, 80, 17));
    assert_eq!(layout.footer, Rect::new(0, 20, 80, 3));
    assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
}

#[test]
fn button_areas_split_footer_evenly() {
    let footer = Rect::new(0, 20, 90, 3);
    let areas = button_areas(footer, 3);

    assert_eq!(areas.len(), 3);
    assert_eq!(areas[0].width, 30);
    assert_eq!(areas[1].x, 30);
    assert_eq!(areas[2].x, 60);
}

// ===== hit_test =====

#[test]
fn click_on_card_body_flips() {
    let layout = calculate_layout(frame_area());
    assert_eq!(
        hit_test(&layout, Phase::Question, 40, 10),
        Some(KeyAction::FlipToggle)
    );
    assert_eq!(
        hit_test(&layout, Phase::Answer, 40, 10),
        Some(KeyAction::FlipToggle)
    );
}

#[test]
fn question_footer_has_previous_and_next() {
    let layout = calculate_layout(frame_area());
    assert_eq!(
        hit_test(&layout, Phase::Question, 5, 21),
        Some(KeyAction::NavigatePrev)
    );
    assert_eq!(
        hit_test(&layout, Phase::Question, 75, 21),
        Some(KeyAction::NavigateNext)
    );
}

#[test]
fn answer_footer_has_hide_need_review_got_it() {
    let layout = calculate_layout(frame_area());
    assert_eq!(
        hit_test(&layout, Phase::Answer, 5, 21),
        Some(KeyAction::FlipToggle)
    );
    assert_eq!(
        hit_test(&layout, Phase::Answer, 40, 21),
        Some(KeyAction::RateNegative)
    );
    assert_eq!(
        hit_test(&layout, Phase::Answer, 75, 21),
        Some(KeyAction::RatePositive)
    );
}

#[test]
fn click_on_header_or_status_misses() {
    let layout = calculate_layout(frame_area());
    assert_eq!(hit_test(&layout, Phase::Question, 10, 0), None);
    assert_eq!(hit_test(&layout, Phase::Question, 10, 23), None);
}

// ===== status_hints =====

#[test]
fn status_hints_show_first_key_of_each_default_binding() {
    assert_eq!(
        status_hints(&KeyBindings::default()),
        "space: flip  ←/→: move  y/x: rate  s: shuffle  r: reset  ?: help  q: quit"
    );
}

#[test]
fn status_hints_follow_overridden_bindings() {
    let overrides = std::collections::HashMap::from([
        ("knew_it".to_string(), vec!["g".to_string()]),
        ("shuffle".to_string(), vec!["ctrl+s".to_string()]),
        ("reset".to_string(), Vec::new()),
    ]);
    let bindings = KeyBindings::default()
        .with_overrides(&overrides)
        .expect("valid overrides");

    let hints = status_hints(&bindings);

    assert!(hints.contains("g/x: rate"), "got {hints}");
    assert!(hints.contains("ctrl+s: shuffle"), "got {hints}");
    assert!(!hints.contains("reset"), "unbound actions are omitted: {hints}");
}

// ===== render_layout =====

#[test]
fn question_screen_shows_title_progress_and_buttons() {
    let session = builtin_session();
    let screen = render_to_string(&session, None);

    assert!(screen.contains("General Knowledge Flash Cards"));
    assert!(screen.contains("Card 1 of 5"));
    assert!(screen.contains("0 completed, 0 need review"));
    assert!(screen.contains("0%"));
    assert!(screen.contains("What is the capital of France?"));
    assert!(screen.contains("Previous"));
    assert!(screen.contains("Next"));
    assert!(screen.contains("?: help"));
    assert!(!screen.contains("Paris"), "answer must stay hidden");
}

#[test]
fn answer_screen_shows_rating_buttons() {
    let mut session = builtin_session();
    session.flip().expect("flip");

    let screen = render_to_string(&session, None);

    assert!(screen.contains("Paris"));
    assert!(screen.contains("Need Review"));
    assert!(screen.contains("Got It"));
    assert!(!screen.contains("Previous"));
}

#[test]
fn notification_replaces_key_hints() {
    let session = builtin_session();
    let screen = render_to_string(&session, Some("The flashcards have been shuffled"));

    assert!(screen.contains("The flashcards have been shuffled"));
    assert!(!screen.contains("?: help"));
}
