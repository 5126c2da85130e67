//! Deck state machine.
//!
//! One `DeckState` per rendered deck. The card list is fixed at construction;
//! only the position and per-card flip flags change. Navigation away from a
//! card resets that card's flip flag, so re-entering a card always starts on
//! the front face. Out-of-bounds navigation is a no-op, never an error.

use cardemy_core::lesson::Card;

/// State of one flashcard deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckState {
    cards: Vec<Card>,
    current: usize,
    flipped: Vec<bool>,
}

impl DeckState {
    /// Creates a deck positioned at the first card, all fronts showing.
    ///
    /// Callers guarantee `cards` is non-empty (empty responses are turned
    /// into a bot message before a deck is ever built).
    pub fn new(cards: Vec<Card>) -> Self {
        debug_assert!(!cards.is_empty());
        let flipped = vec![false; cards.len()];
        Self {
            cards,
            current: 0,
            flipped,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The card at the viewport position.
    pub fn current_card(&self) -> &Card {
        &self.cards[self.current]
    }

    /// Whether the current card shows its back face.
    pub fn is_flipped(&self) -> bool {
        self.flipped[self.current]
    }

    /// Toggles which face of the current card is legible.
    pub fn flip(&mut self) {
        self.flipped[self.current] = !self.flipped[self.current];
    }

    pub fn can_prev(&self) -> bool {
        self.current > 0
    }

    pub fn can_next(&self) -> bool {
        self.current + 1 < self.cards.len()
    }

    /// Moves to the next card, resetting the flip flag of the card being
    /// left. No-op at the last card.
    pub fn next(&mut self) {
        if self.can_next() {
            self.flipped[self.current] = false;
            self.current += 1;
        }
    }

    /// Moves to the previous card, resetting the flip flag of the card being
    /// left. No-op at the first card.
    pub fn prev(&mut self) {
        if self.can_prev() {
            self.flipped[self.current] = false;
            self.current -= 1;
        }
    }

    /// Position indicator text, 1-based.
    pub fn counter_text(&self) -> String {
        format!("Card {} of {}", self.current + 1, self.cards.len())
    }
}
