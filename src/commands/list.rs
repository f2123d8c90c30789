use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use rinkside_core::config::RinksideConfig;

use super::{FilterArgs, load_events, select};
use crate::render::{render_count, render_listing};

pub async fn run(feed: &Path, filters: &FilterArgs, config: &RinksideConfig) -> Result<()> {
    let events = load_events(feed).await?;
    let shown = select(&events, filters, config);

    if shown.is_empty() {
        println!("{}", "No events found".dimmed());
    } else {
        println!("{}", render_listing(&shown));
        println!();
    }

    println!("{}", render_count(shown.len(), events.len()).dimmed());

    let spec = filters.to_spec(config);
    if spec.is_active() {
        println!("{}", format!("Filters: ?{}", spec.to_query()).dimmed());
    }

    Ok(())
}
