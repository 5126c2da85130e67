//! Feature modules, each owning its slice of state and rendering.

pub mod carousel;
pub mod input;
pub mod transcript;
