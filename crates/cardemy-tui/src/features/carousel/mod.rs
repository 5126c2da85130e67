//! Flashcard carousel: a navigable, flippable deck rendered inside the
//! transcript.

mod render;
mod state;

pub use render::render_deck;
pub use state::DeckState;
