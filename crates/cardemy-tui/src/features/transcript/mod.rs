//! Message transcript: the append-only log of chat cells.

mod cell;
mod render;
mod state;

pub use cell::HistoryCell;
pub use render::render_transcript;
pub use state::{ScrollState, TranscriptState};
