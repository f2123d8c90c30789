use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use rinkside_core::query::{distinct_cities, distinct_dates};

use super::load_events;
use crate::render::render_date_facet;

pub async fn cities(feed: &Path) -> Result<()> {
    let events = load_events(feed).await?;
    let cities = distinct_cities(&events);

    if cities.is_empty() {
        println!("{}", "No events found".dimmed());
    }
    for city in cities {
        println!("{}", city);
    }

    Ok(())
}

pub async fn dates(feed: &Path) -> Result<()> {
    let events = load_events(feed).await?;
    let dates = distinct_dates(&events);

    if dates.is_empty() {
        println!("{}", "No events found".dimmed());
    }
    for date in dates {
        println!("{}", render_date_facet(&date));
    }

    Ok(())
}
