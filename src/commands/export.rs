use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rinkside_core::config::RinksideConfig;
use rinkside_core::export::write_calendar_file;

use super::{FilterArgs, load_events, pick, select};

pub async fn run(
    feed: &Path,
    index: usize,
    dir: &Path,
    filters: &FilterArgs,
    config: &RinksideConfig,
) -> Result<()> {
    let events = load_events(feed).await?;
    let event = pick(select(&events, filters, config), index)?;

    let path = write_calendar_file(&event, dir)
        .with_context(|| format!("Could not write calendar file to {}", dir.display()))?;

    println!("{}", format!("  Saved: {}", path.display()).green());

    Ok(())
}
