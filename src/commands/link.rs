use std::path::Path;

use anyhow::Result;
use rinkside_core::config::RinksideConfig;
use rinkside_core::export::to_calendar_service_url;

use super::{FilterArgs, load_events, pick, select};

pub async fn run(
    feed: &Path,
    index: usize,
    filters: &FilterArgs,
    config: &RinksideConfig,
) -> Result<()> {
    let events = load_events(feed).await?;
    let event = pick(select(&events, filters, config), index)?;

    println!("{}", to_calendar_service_url(&event));

    Ok(())
}
