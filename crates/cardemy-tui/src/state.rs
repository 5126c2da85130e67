//! Application state composition.
//!
//! Single state tree mutated only by the reducer in `update.rs`:
//!
//! ```text
//! AppState
//! ├── input: InputState           (topic buffer, cursor)
//! ├── transcript: TranscriptState (cells, scroll, greeting flag)
//! ├── mode: LearnMode             (active mode selection)
//! ├── request_seq: RequestSeq     (request id generator)
//! └── in_flight / spinner_frame / should_quit / frame size
//! ```

use cardemy_core::lesson::LearnMode;

use crate::common::RequestSeq;
use crate::input::InputState;
use crate::transcript::TranscriptState;

/// Combined application state for the TUI.
pub struct AppState {
    pub input: InputState,
    pub transcript: TranscriptState,
    /// Mode applied to the next submission. Tab toggles it.
    pub mode: LearnMode,
    pub request_seq: RequestSeq,
    /// Number of outstanding generation requests.
    pub in_flight: usize,
    /// Spinner animation frame, advanced on Tick.
    pub spinner_frame: usize,
    pub should_quit: bool,
    /// Terminal size from the last frame, used to clamp scrolling.
    pub frame_width: u16,
    pub frame_height: u16,
}

impl AppState {
    pub fn new(default_mode: LearnMode) -> Self {
        Self {
            input: InputState::default(),
            transcript: TranscriptState::default(),
            mode: default_mode,
            request_seq: RequestSeq::default(),
            in_flight: 0,
            spinner_frame: 0,
            should_quit: false,
            frame_width: 80,
            frame_height: 24,
        }
    }

    /// True while any request is outstanding (drives fast polling and the
    /// status spinner).
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}
