//! Shared building blocks for the TUI: request identity and text helpers.

pub mod text;

pub use text::{truncate_with_ellipsis, wrap_text};

/// Unique identifier for one submitted request cycle.
///
/// Each submission gets a fresh id; the thinking placeholder and the
/// completion event carry it so overlapping cycles never touch each other's
/// placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// Monotonic generator for [`RequestId`]s, owned by the app state.
#[derive(Debug, Default)]
pub struct RequestSeq {
    next: u64,
}

impl RequestSeq {
    pub fn next(&mut self) -> RequestId {
        let id = RequestId(self.next);
        self.next += 1;
        id
    }
}
