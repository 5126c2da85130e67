//! Pure line renderer for a deck.
//!
//! Derives display lines from [`DeckState`] only; never mutates it. Exactly
//! one card and exactly one of its faces appear in the output.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::DeckState;
use crate::common::wrap_text;


/// Preferred card width in columns; narrower terminals shrink to fit.
const CARD_MAX_WIDTH: usize = 44;

const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

fn face_style(flipped: bool) -> Style {
    if flipped {
        Style::new().fg(Color::Yellow)
    } else {
        Style::new().add_modifier(Modifier::BOLD)
    }
}

fn nav_style(enabled: bool) -> Style {
    if enabled {
        Style::new().fg(Color::Cyan)
    } else {
        Style::new().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

/// Renders the deck as display lines for the transcript.
///
/// Shows the current card's legible face inside a box, then a navigation row
/// with the position counter. Controls at the bounds render dimmed.
pub fn render_deck(deck: &DeckState, width: usize) -> Vec<Line<'static>> {
    let card_width = width.clamp(8, CARD_MAX_WIDTH);
    let inner_width = card_width - 4; // borders plus one column of padding

    let face_text = if deck.is_flipped() {
        &deck.current_card().back
    } else {
        &deck.current_card().front
    };

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        format!("╭{}╮", "─".repeat(card_width - 2)),
        BORDER_STYLE,
    )));

    for row in wrap_text(face_text, inner_width) {
        let pad = inner_width.saturating_sub(row.width());
        lines.push(Line::from(vec![
            Span::styled("│ ".to_string(), BORDER_STYLE),
            Span::styled(row, face_style(deck.is_flipped())),
            Span::raw(" ".repeat(pad)),
            Span::styled(" │".to_string(), BORDER_STYLE),
        ]));
    }

    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(card_width - 2)),
        BORDER_STYLE,
    )));

    lines.push(Line::from(vec![
        Span::styled("‹ prev".to_string(), nav_style(deck.can_prev())),
        Span::raw("   "),
        Span::styled(deck.counter_text(), Style::new().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled("next ›".to_string(), nav_style(deck.can_next())),
    ]));

    lines
}
