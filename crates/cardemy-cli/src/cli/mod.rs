//! CLI entry and dispatch.

use anyhow::{Context, Result};
use cardemy_core::config::Config;
use cardemy_core::lesson::LearnMode;
use cardemy_core::logging;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "cardemy")]
#[command(version)]
#[command(about = "AI-generated flashcards in a terminal chat")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the lesson server URL from config
    #[arg(long, value_name = "URL")]
    server_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Generate one deck non-interactively and print it
    Exec {
        /// Topic to generate flashcards for
        #[arg(short, long)]
        topic: String,

        /// Learning mode: revision or learning (default from config)
        #[arg(short, long, value_parser = parse_mode)]
        mode: Option<LearnMode>,

        /// Print the deck as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

fn parse_mode(value: &str) -> Result<LearnMode, String> {
    value.parse()
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = Config::load().context("load config")?;

    if let Some(url) = cli.server_url.as_deref() {
        config.set_server_url(url)?;
    }

    // default to chat mode
    let Some(command) = cli.command else {
        // The TUI owns the screen, so logging goes to the file only.
        let _guard = logging::init(&config.logging, false)?;
        return commands::chat::run(&config).await;
    };

    match command {
        Commands::Exec { topic, mode, json } => {
            let _guard = logging::init(&config.logging, true)?;
            commands::exec::run(&config, &topic, mode, json).await
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
