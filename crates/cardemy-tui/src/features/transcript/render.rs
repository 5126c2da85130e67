//! Pure line renderer for the transcript.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::{HistoryCell, TranscriptState};
use crate::common::wrap_text;
use crate::features::carousel;

const USER_PREFIX: &str = "❯ ";

fn greeting_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Hi! What would you like to study today?",
            Style::new().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Type a topic and press Enter. Tab switches between revision and learning.",
            Style::new().fg(Color::DarkGray),
        )),
    ]
}

/// Renders all cells to display lines at the given width.
///
/// The caller applies scrolling; this function only derives lines from state.
/// While the transcript is empty and the greeting has not been dismissed, the
/// greeting renders instead.
pub fn render_transcript(
    state: &TranscriptState,
    width: usize,
    spinner: &'static str,
) -> Vec<Line<'static>> {
    if state.is_empty() && !state.greeting_dismissed {
        return greeting_lines();
    }

    let mut lines = Vec::new();
    for (i, cell) in state.cells().iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        match cell {
            HistoryCell::User { text } => {
                // Prefix is two display columns.
                let body_width = width.saturating_sub(2);
                for (j, row) in wrap_text(text, body_width.max(1)).into_iter().enumerate() {
                    let prefix = if j == 0 { USER_PREFIX } else { "  " };
                    lines.push(Line::from(vec![
                        Span::styled(prefix, Style::new().fg(Color::Cyan)),
                        Span::styled(row, Style::new().add_modifier(Modifier::BOLD)),
                    ]));
                }
            }
            HistoryCell::Bot { text } => {
                for row in wrap_text(text, width.max(1)) {
                    lines.push(Line::from(Span::raw(row)));
                }
            }
            HistoryCell::Thinking { .. } => {
                lines.push(Line::from(vec![
                    Span::styled(spinner.to_string(), Style::new().fg(Color::Yellow)),
                    Span::styled(
                        " Thinking…",
                        Style::new()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    ),
                ]));
            }
            HistoryCell::Carousel { deck } => {
                lines.extend(carousel::render_deck(deck, width));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use cardemy_core::lesson::Card;

    use super::*;
    use crate::common::RequestSeq;
    use crate::features::carousel::DeckState;

    fn rendered_text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn greeting_shows_only_before_first_submission() {
        let mut transcript = TranscriptState::default();
        let text = rendered_text(&render_transcript(&transcript, 80, "◐"));
        assert!(text.contains("What would you like to study"));

        transcript.greeting_dismissed = true;
        let text = rendered_text(&render_transcript(&transcript, 80, "◐"));
        assert!(!text.contains("What would you like to study"));
    }

    #[test]
    fn renders_each_cell_kind() {
        let mut seq = RequestSeq::default();
        let mut transcript = TranscriptState::default();
        transcript.greeting_dismissed = true;
        transcript.push_cell(HistoryCell::user("Photosynthesis"));
        transcript.push_cell(HistoryCell::thinking(seq.next()));
        transcript.push_cell(HistoryCell::bot("a reply"));
        transcript.push_cell(HistoryCell::carousel(DeckState::new(vec![Card {
            front: "Q".to_string(),
            back: "A".to_string(),
        }])));

        let text = rendered_text(&render_transcript(&transcript, 80, "◐"));
        assert!(text.contains("❯ Photosynthesis"));
        assert!(text.contains("Thinking…"));
        assert!(text.contains("a reply"));
        assert!(text.contains("Card 1 of 1"));
    }
}
