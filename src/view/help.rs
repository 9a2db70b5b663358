//! Help overlay widget displaying keyboard and mouse shortcuts.
//!
//! Shows a centered modal overlay with shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc', '?' or a click.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::{MUTED_TEXT, SECTION_HEADER};
use crate::config::KeyBindings;
use crate::model::KeyAction;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen, listing `bindings`.
pub fn render_help_overlay(frame: &mut Frame, bindings: &KeyBindings) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(bindings))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let close_hint = match bindings.labels_for(KeyAction::Help).first() {
        Some(label) => format!(" Press Esc or {label} to close "),
        None => " Press Esc to close ".to_string(),
    };
    let hint = Paragraph::new(Line::from(vec![Span::styled(
        close_hint,
        MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn shortcut(keys: impl Into<String>, description: &'static str) -> Line<'static> {
    let keys = keys.into();
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled(format!("  {keys:<14}"), key_style),
        Span::styled(description, Style::default().fg(Color::White)),
    ])
}

/// All keys bound to `action`, slash-separated.
fn keys_text(bindings: &KeyBindings, action: KeyAction) -> String {
    let labels = bindings.labels_for(action);
    if labels.is_empty() {
        "unbound".to_string()
    } else {
        labels.join("/")
    }
}

/// Help content lines grouped by category.
fn build_help_content(bindings: &KeyBindings) -> Vec<Line<'static>> {
    let keys = |action| keys_text(bindings, action);
    // Ctrl+C quits regardless of bindings.
    let quit_keys = match bindings.labels_for(KeyAction::Quit).as_slice() {
        [] => "ctrl+c".to_string(),
        labels => format!("{}/ctrl+c", labels.join("/")),
    };

    vec![
        Line::from(Span::styled("Review", SECTION_HEADER)),
        shortcut(keys(KeyAction::FlipToggle), "Reveal or hide the answer"),
        shortcut(keys(KeyAction::NavigateNext), "Next card"),
        shortcut(keys(KeyAction::NavigatePrev), "Previous card"),
        shortcut(keys(KeyAction::RatePositive), "Got it"),
        shortcut(keys(KeyAction::RateNegative), "Need review"),
        Line::default(),
        Line::from(Span::styled("Deck", SECTION_HEADER)),
        shortcut(keys(KeyAction::Shuffle), "Shuffle and start over"),
        shortcut(keys(KeyAction::Reset), "Reset progress"),
        Line::default(),
        Line::from(Span::styled("Mouse", SECTION_HEADER)),
        shortcut("Click card", "Reveal or hide the answer"),
        shortcut("Click button", "Press the button"),
        shortcut("Wheel", "Next / previous card"),
        Line::default(),
        Line::from(Span::styled("Application", SECTION_HEADER)),
        shortcut(keys(KeyAction::Help), "Toggle this help"),
        shortcut(quit_keys, "Quit"),
    ]
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
