//! Transcript cell variants.

use crate::common::RequestId;
use crate::features::carousel::DeckState;

/// One entry in the transcript.
///
/// Cells are append-only. The only removal is a `Thinking` cell once its
/// request completes; the only in-place mutation is navigation and flipping
/// inside a `Carousel` cell's own deck.
#[derive(Debug)]
pub enum HistoryCell {
    /// Topic the user submitted.
    User { text: String },
    /// Fixed-text bot reply (failure or empty-deck outcome).
    Bot { text: String },
    /// Placeholder shown while the request with this id is outstanding.
    Thinking { request: RequestId },
    /// A generated deck.
    Carousel { deck: DeckState },
}

impl HistoryCell {
    pub fn user(text: impl Into<String>) -> Self {
        Self::User { text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::Bot { text: text.into() }
    }

    pub fn thinking(request: RequestId) -> Self {
        Self::Thinking { request }
    }

    pub fn carousel(deck: DeckState) -> Self {
        Self::Carousel { deck }
    }
}
