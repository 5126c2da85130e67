//! Full-screen TUI implementation for Cardemy.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use cardemy_core::config::Config;
pub use features::{carousel, input, transcript};
pub use runtime::TuiRuntime;

/// Runs the interactive flashcard chat loop.
pub async fn run_interactive_chat(config: &Config) -> Result<()> {
    // Chat mode requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "Chat mode requires a terminal.\n\
             Use `cardemy exec --topic '...'` for non-interactive generation."
        );
    }

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "Cardemy")?;
    writeln!(err, "Server: {}", config.server_url)?;
    writeln!(err, "Mode: {}", config.default_mode)?;
    err.flush()?;

    let mut runtime = TuiRuntime::new(config)?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
