//! One-shot deck generation without the interactive UI.

use anyhow::{Context, Result};
use cardemy_core::config::Config;
use cardemy_core::lesson::{LearnMode, LessonClient};

pub async fn run(config: &Config, topic: &str, mode: Option<LearnMode>, json: bool) -> Result<()> {
    let topic = topic.trim();
    if topic.is_empty() {
        anyhow::bail!("Topic must not be empty");
    }
    let mode = mode.unwrap_or(config.default_mode);

    let client = LessonClient::new(config)?;
    let cards = client
        .generate(topic, mode)
        .await
        .context("generate flashcards")?;

    if cards.is_empty() {
        anyhow::bail!("No flashcards generated for this topic");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Card {} of {}", i + 1, cards.len());
        println!("  front: {}", card.front);
        println!("  back:  {}", card.back);
    }
    Ok(())
}
