//! Core library for Cardemy: configuration, logging bootstrap, and the
//! lesson-generation client shared by the CLI and the TUI.

pub mod config;
pub mod lesson;
pub mod logging;
