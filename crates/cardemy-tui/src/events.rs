//! UI event types.
//!
//! Events are inputs to the reducer. They arrive from the terminal, the tick
//! timer, or the inbox channel that async handlers send their results to.

use cardemy_core::lesson::{Card, LessonResult};

use crate::common::RequestId;

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (drives the spinner and caps the frame rate).
    Tick,
    /// Current terminal size, prepended by the runtime every loop iteration
    /// so scroll clamping sees the real viewport.
    Frame { width: u16, height: u16 },
    /// Raw terminal event (key press, resize, ...).
    Terminal(crossterm::event::Event),
    /// A generation request finished, successfully or not.
    ///
    /// `request` matches the id given to the thinking placeholder when the
    /// cycle started, so overlapping cycles resolve independently.
    LessonCompleted {
        request: RequestId,
        outcome: LessonResult<Vec<Card>>,
    },
}
