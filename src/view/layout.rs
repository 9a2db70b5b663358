//! Review screen layout and pointer hit testing.
//!
//! Area calculation is pure so the event loop can map mouse coordinates to
//! actions using the rectangles of the last rendered frame.

use super::card::render_card;
use super::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, PROGRESS_HEIGHT, STATUS_BAR_HEIGHT};
use super::styles::{CardStyles, MUTED_TEXT};
use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::{Phase, ProgressView, ReviewSession};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Screen areas of the review layout, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewLayout {
    /// Deck title.
    pub header: Rect,
    /// Position, tally and gauge.
    pub progress: Rect,
    /// Card body.
    pub card: Rect,
    /// Phase buttons.
    pub footer: Rect,
    /// Notifications and key hints.
    pub status: Rect,
}

/// Split the frame into header, progress, card, footer and status areas.
pub fn calculate_layout(area: Rect) -> ReviewLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(PROGRESS_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ReviewLayout {
        header: chunks[0],
        progress: chunks[1],
        card: chunks[2],
        footer: chunks[3],
        status: chunks[4],
    }
}

/// Footer buttons for a phase, left to right.
pub fn footer_buttons(phase: Phase) -> &'static [(&'static str, KeyAction)] {
    match phase {
        Phase::Question => &[
            ("Previous", KeyAction::NavigatePrev),
            ("Next", KeyAction::NavigateNext),
        ],
        Phase::Answer => &[
            ("Hide", KeyAction::FlipToggle),
            ("Need Review", KeyAction::RateNegative),
            ("Got It", KeyAction::RatePositive),
        ],
    }
}

/// Equal-width button rectangles across the footer.
pub fn button_areas(footer: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let count = count as u32;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(footer)
        .to_vec()
}

/// Action for a left click at (`column`, `row`), if it landed on something.
///
/// The card body toggles the answer; footer clicks press the button under
/// the cursor.
pub fn hit_test(layout: &ReviewLayout, phase: Phase, column: u16, row: u16) -> Option<KeyAction> {
    let point = Position::new(column, row);

    if layout.card.contains(point) {
        return Some(KeyAction::FlipToggle);
    }

    if layout.footer.contains(point) {
        let buttons = footer_buttons(phase);
        return button_areas(layout.footer, buttons.len())
            .into_iter()
            .zip(buttons)
            .find(|(area, _)| area.contains(point))
            .map(|(_, (_, action))| *action);
    }

    None
}

/// Status bar hints: caption and the actions whose first key is shown.
const HINTS: &[(&str, &[KeyAction])] = &[
    ("flip", &[KeyAction::FlipToggle]),
    ("move", &[KeyAction::NavigatePrev, KeyAction::NavigateNext]),
    ("rate", &[KeyAction::RatePositive, KeyAction::RateNegative]),
    ("shuffle", &[KeyAction::Shuffle]),
    ("reset", &[KeyAction::Reset]),
    ("help", &[KeyAction::Help]),
    ("quit", &[KeyAction::Quit]),
];

/// Key hint line for the status bar, built from the active bindings.
///
/// Actions left without keys are omitted.
pub fn status_hints(bindings: &KeyBindings) -> String {
    HINTS
        .iter()
        .filter_map(|(caption, actions)| {
            let keys: Vec<String> = actions
                .iter()
                .filter_map(|action| bindings.labels_for(*action).into_iter().next())
                .collect();
            if keys.is_empty() {
                None
            } else {
                Some(format!("{}: {caption}", keys.join("/")))
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Everything the review screen shows besides the session itself.
#[derive(Debug, Clone, Copy)]
pub struct ScreenContext<'a> {
    /// Palette to draw with.
    pub styles: &'a CardStyles,
    /// Toast replacing the key hints, if one is active.
    pub notification: Option<&'a str>,
    /// Key hints shown when no toast is active.
    pub key_hints: &'a str,
}

/// Render the full review screen into `layout`.
pub fn render_layout(
    frame: &mut Frame,
    layout: &ReviewLayout,
    session: &ReviewSession,
    ctx: ScreenContext<'_>,
) {
    render_header(frame, layout.header, session);
    render_progress(frame, layout.progress, session, ctx.styles);
    render_card(frame, layout.card, session, ctx.styles);
    render_footer(frame, layout.footer, session.phase(), ctx.styles);
    render_status_bar(frame, layout.status, ctx);
}

fn render_header(frame: &mut Frame, area: Rect, session: &ReviewSession) {
    let title = format!("{} Flash Cards", session.current_card().category().title());
    let header = Paragraph::new(Line::from(vec![Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn render_progress(frame: &mut Frame, area: Rect, session: &ReviewSession, styles: &CardStyles) {
    let progress = ProgressView::new(session);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let labels = Line::from(vec![
        Span::raw(progress.position_label()),
        Span::styled("  ·  ", MUTED_TEXT),
        Span::styled(progress.tally_label(), MUTED_TEXT),
    ]);
    frame.render_widget(Paragraph::new(labels), rows[0]);

    let percent = progress.percent();
    let gauge = Gauge::default()
        .gauge_style(styles.gauge)
        .percent(u16::from(percent))
        .label(format!("{percent}%"));
    frame.render_widget(gauge, rows[1]);
}

fn render_footer(frame: &mut Frame, area: Rect, phase: Phase, styles: &CardStyles) {
    let buttons = footer_buttons(phase);
    for (button_area, (label, _)) in button_areas(area, buttons.len()).into_iter().zip(buttons) {
        let button = Paragraph::new(Line::from(*label))
            .style(styles.button)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, button_area);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: ScreenContext<'_>) {
    let line = match ctx.notification {
        Some(text) => Line::from(Span::styled(format!(" {text} "), ctx.styles.notification)),
        None => Line::from(Span::styled(ctx.key_hints.to_string(), MUTED_TEXT)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
