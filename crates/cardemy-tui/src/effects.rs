//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use cardemy_core::lesson::LearnMode;

use crate::common::RequestId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Issue one generation request for a submitted topic.
    ///
    /// The runtime spawns the HTTP call and sends the result back as
    /// `UiEvent::LessonCompleted` with the same `request` id.
    GenerateLesson {
        request: RequestId,
        topic: String,
        mode: LearnMode,
    },
}
