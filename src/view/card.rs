//! Card body widget.

use super::styles::{CardStyles, MUTED_TEXT, SECTION_HEADER};
use crate::model::Card;
use crate::state::{CardStatus, ProgressView, ReviewSession};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the current card: the question side, or the answer side once revealed.
pub fn render_card(frame: &mut Frame, area: Rect, session: &ReviewSession, styles: &CardStyles) {
    let view = session.view();
    let status = ProgressView::new(session).card_status(view.card.id());

    let mut title = vec![Span::styled(
        if view.revealed { " Answer " } else { " Question " },
        SECTION_HEADER,
    )];
    match status {
        CardStatus::Completed => title.push(Span::styled("✓ completed ", styles.completed)),
        CardStatus::NeedsReview => title.push(Span::styled("↻ needs review ", styles.needs_review)),
        CardStatus::Pending => {}
    }

    let lines = if view.revealed {
        answer_lines(view.card, styles)
    } else {
        question_lines(view.card, styles)
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(Line::from(title)).borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Lines shown before the answer is revealed.
pub fn question_lines(card: &Card, styles: &CardStyles) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(card.question().to_string(), styles.question))];
    push_code(&mut lines, card, styles);
    push_metadata(&mut lines, card);
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Press space or click to reveal the answer", MUTED_TEXT)));
    lines
}

/// Lines shown once the answer is revealed.
pub fn answer_lines(card: &Card, styles: &CardStyles) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(card.question().to_string(), MUTED_TEXT)),
        Line::default(),
        Line::from(Span::styled(card.answer().to_string(), styles.answer)),
    ];

    if let Some(explanation) = card.explanation() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Explanation", SECTION_HEADER)));
        lines.extend(
            explanation
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), styles.explanation))),
        );
    }

    push_code(&mut lines, card, styles);
    push_metadata(&mut lines, card);
    lines
}

fn push_code(lines: &mut Vec<Line<'static>>, card: &Card, styles: &CardStyles) {
    let Some(code) = card.code() else {
        return;
    };
    lines.push(Line::default());
    lines.extend(
        code.lines()
            .map(|line| Line::from(Span::styled(format!("  {line}"), styles.code))),
    );
}

fn push_metadata(lines: &mut Vec<Line<'static>>, card: &Card) {
    let mut parts = Vec::new();
    if let Some(difficulty) = card.difficulty() {
        parts.push(difficulty.as_str().to_string());
    }
    if !card.tags().is_empty() {
        parts.push(card.tags().iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" "));
    }
    if parts.is_empty() {
        return;
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(parts.join("  ·  "), MUTED_TEXT)));
}
