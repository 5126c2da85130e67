//! Config command handlers.

use anyhow::{Context, Result};
use cardemy_core::config;

pub fn path() -> Result<()> {
    println!("{}", config::config_path_display());
    Ok(())
}

pub fn init() -> Result<()> {
    let config_path = config::paths::config_path();
    let created = config::init_config_file()
        .with_context(|| format!("init config at {}", config_path.display()))?;
    if created {
        println!("Created config at {}", config_path.display());
    } else {
        println!("Config already exists at {}", config_path.display());
    }
    Ok(())
}
