//! Transcript state: the ordered cell log plus scroll position.

use tracing::debug;

use super::HistoryCell;
use crate::common::RequestId;
use crate::features::carousel::DeckState;

/// Scroll position over the rendered transcript lines.
///
/// `offset` counts lines up from the bottom; zero means following the newest
/// entry. Any append snaps back to following.
#[derive(Debug, Default)]
pub struct ScrollState {
    offset: usize,
}

impl ScrollState {
    pub fn is_following(&self) -> bool {
        self.offset == 0
    }

    /// Lines hidden below the viewport; clamped against `max` at render time.
    pub fn offset_from_bottom(&self, max: usize) -> usize {
        self.offset.min(max)
    }

    pub fn scroll_up(&mut self, lines: usize, max: usize) {
        self.offset = (self.offset + lines).min(max);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    fn follow(&mut self) {
        self.offset = 0;
    }
}

/// The append-only message log.
#[derive(Debug, Default)]
pub struct TranscriptState {
    cells: Vec<HistoryCell>,
    pub scroll: ScrollState,
    /// Set on the first submission; the greeting renders only before that.
    pub greeting_dismissed: bool,
}

impl TranscriptState {
    pub fn cells(&self) -> &[HistoryCell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Appends a cell and snaps the scroll to the newest entry.
    pub fn push_cell(&mut self, cell: HistoryCell) {
        self.cells.push(cell);
        self.scroll.follow();
    }

    /// Removes the thinking placeholder for `request` if present.
    ///
    /// Idempotent: a second call (or a call after the placeholder was never
    /// appended) changes nothing. Other requests' placeholders are untouched.
    pub fn remove_thinking(&mut self, request: RequestId) {
        let before = self.cells.len();
        self.cells
            .retain(|cell| !matches!(cell, HistoryCell::Thinking { request: r } if *r == request));
        if self.cells.len() == before {
            debug!(%request, "thinking placeholder already absent");
        }
    }

    /// The deck of the most recently appended carousel, if any.
    ///
    /// Navigation keys act on this deck only; earlier decks keep their own
    /// state untouched.
    pub fn active_deck_mut(&mut self) -> Option<&mut DeckState> {
        self.cells.iter_mut().rev().find_map(|cell| match cell {
            HistoryCell::Carousel { deck } => Some(deck),
            _ => None,
        })
    }
}
