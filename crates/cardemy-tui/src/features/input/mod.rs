//! Topic input: a single-line editable buffer.

mod state;

pub use state::InputState;
