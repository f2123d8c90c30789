use std::path::Path;

use anyhow::{Context, Result};
use rinkside_core::event::{Address, Arena, EventType};
use rinkside_core::feed::to_feed_json;
use rinkside_core::import::{ImportRule, import_events};

pub fn arena(name: String, street: String, city: String, state: String, zip_code: String) -> Arena {
    Arena {
        name,
        address: Address {
            street,
            city,
            state,
            zip_code,
        },
        notes: None,
    }
}

pub async fn run(file: &Path, arena: Arena, marker: String, event_type: String) -> Result<()> {
    let ics = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Could not read {}", file.display()))?;

    let rule = ImportRule::new(marker, EventType::from(event_type));
    let events = import_events(&ics, &arena, &rule)
        .with_context(|| format!("Could not import events from {}", file.display()))?;

    println!("{}", to_feed_json(&events)?);

    Ok(())
}
