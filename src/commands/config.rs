use std::path::{Path, PathBuf};

use anyhow::Result;
use owo_colors::OwoColorize;
use rinkside_core::config::RinksideConfig;

pub fn run(mut config: RinksideConfig, set_feed: Option<PathBuf>) -> Result<()> {
    let config_path = RinksideConfig::config_path()?;

    if let Some(feed) = set_feed {
        let saved = save_feed(&config_path, feed)?;
        println!("{}", format!("  Feed set to {}", saved.feed.display()).green());
        println!();
        config = RinksideConfig::load()?;
    }

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Feed:       {}", config.feed_path().display());
    println!();
    println!("{}", "Defaults".bold());
    println!("  Sort:       {}", config.default_sort);
    println!("  Upcoming:   {} hours", config.upcoming_hours);

    Ok(())
}

/// Change the feed in the file at `config_path`. Values that only come from
/// `RINKSIDE_*` variables are not written.
fn save_feed(config_path: &Path, feed: PathBuf) -> Result<RinksideConfig> {
    let mut stored = RinksideConfig::load_from(config_path)?;
    stored.feed = feed;
    stored.save_to(config_path)?;
    Ok(stored)
}
