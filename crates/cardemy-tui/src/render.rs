//! Pure view functions for the TUI.
//!
//! Everything here takes `&AppState`, draws to a ratatui frame, and never
//! mutates state or returns effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::AppState;
use crate::transcript;

/// Height of the bordered input box.
const INPUT_HEIGHT: u16 = 3;

/// Height of the status line below the input.
const STATUS_HEIGHT: u16 = 1;

/// Horizontal transcript padding on each side.
const TRANSCRIPT_MARGIN: u16 = 1;

/// Spinner frames for the thinking placeholder and status line.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Transcript content area (columns, rows) for a terminal of the given size.
///
/// Shared with the reducer so scroll clamping matches what is drawn.
pub fn transcript_viewport(width: u16, height: u16) -> (usize, usize) {
    let columns = width.saturating_sub(TRANSCRIPT_MARGIN * 2) as usize;
    let rows = height.saturating_sub(INPUT_HEIGHT + STATUS_HEIGHT) as usize;
    (columns, rows)
}

/// Renders the entire TUI to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    render_transcript_pane(state, frame, chunks[0]);
    render_input(state, frame, chunks[1]);
    render_status_line(state, frame, chunks[2]);
}

fn render_transcript_pane(state: &AppState, frame: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(TRANSCRIPT_MARGIN * 2) as usize;
    let height = area.height as usize;

    let all_lines = transcript::render_transcript(
        &state.transcript,
        width,
        spinner_glyph(state.spinner_frame),
    );
    let total = all_lines.len();

    // Scroll offset counts lines hidden below the viewport; zero follows the
    // newest entry.
    let max_offset = total.saturating_sub(height);
    let from_bottom = state.transcript.scroll.offset_from_bottom(max_offset);
    let top = max_offset - from_bottom;

    let visible_end = (top + height).min(total);
    let content: Vec<Line<'static>> = all_lines
        .into_iter()
        .skip(top)
        .take(visible_end - top)
        .collect();

    // Bottom-align: pad at the top when content doesn't fill the pane.
    let visible: Vec<Line<'static>> = if content.len() < height {
        let mut padded = vec![Line::default(); height - content.len()];
        padded.extend(content);
        padded
    } else {
        content
    };

    // Content is pre-wrapped; no Paragraph wrap to avoid double-wrapping.
    let paragraph = Paragraph::new(visible);
    let inner = Rect {
        x: area.x + TRANSCRIPT_MARGIN,
        y: area.y,
        width: area.width.saturating_sub(TRANSCRIPT_MARGIN * 2),
        height: area.height,
    };
    frame.render_widget(paragraph, inner);
}

fn render_input(state: &AppState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(Color::DarkGray))
        .title(" topic ");
    let paragraph = Paragraph::new(state.input.text()).block(block);
    frame.render_widget(paragraph, area);

    // Cursor inside the border.
    let max_x = area.x + area.width.saturating_sub(2);
    let cursor_x = (area.x + 1 + state.input.cursor_column() as u16).min(max_x);
    frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
}

fn render_status_line(state: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = vec![
        Span::styled(" mode: ", Style::new().fg(Color::DarkGray)),
        Span::styled(
            state.mode.display_name(),
            Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    if state.is_busy() {
        spans.push(Span::styled(
            spinner_glyph(state.spinner_frame),
            Style::new().fg(Color::Yellow),
        ));
        spans.push(Span::styled(
            " generating…",
            Style::new().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            "Enter send · Tab mode · ←/→ cards · Space flip · Esc quit",
            Style::new().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
