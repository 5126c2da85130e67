//! Interactive chat command (the default mode).

use anyhow::Result;
use cardemy_core::config::Config;

pub async fn run(config: &Config) -> Result<()> {
    cardemy_tui::run_interactive_chat(config).await
}
