pub mod config;
pub mod export;
pub mod facets;
pub mod import;
pub mod link;
pub mod list;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Args;
use rinkside_core::config::RinksideConfig;
use rinkside_core::event::Event;
use rinkside_core::feed::{self, parse_feed};
use rinkside_core::query::{FilterSpec, SortBy, query};

/// Filter flags shared by every command that works on the listed events.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Only events in this city
    #[arg(long)]
    pub city: Option<String>,

    /// Only events starting on this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Only events of this type (e.g. "Open Skate")
    #[arg(long = "type")]
    pub event_type: Option<String>,

    /// Ordering: time, cost-asc or cost-desc
    #[arg(long)]
    pub sort: Option<SortBy>,

    /// Only events starting within the configured upcoming window
    #[arg(long)]
    pub upcoming: bool,

    /// Filters as a URL query string, e.g. "city=Eagan&sort=cost-asc".
    /// Individual flags take precedence.
    #[arg(long)]
    pub query: Option<String>,
}

impl FilterArgs {
    /// Config defaults, then `--query`, then individual flags.
    pub fn to_spec(&self, config: &RinksideConfig) -> FilterSpec {
        let mut spec = FilterSpec {
            sort_by: config.default_sort,
            ..Default::default()
        };
        if let Some(q) = &self.query {
            spec.apply_query(q);
        }

        if self.city.is_some() {
            spec.city = self.city.clone();
        }
        if self.date.is_some() {
            spec.date = self.date.clone();
        }
        if self.event_type.is_some() {
            spec.event_type = self.event_type.clone();
        }
        if let Some(sort) = self.sort {
            spec.sort_by = sort;
        }

        spec
    }
}

pub async fn load_events(path: &Path) -> Result<Vec<Event>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to load events from {}", path.display()))?;

    let events = parse_feed(&json).context("Failed to load events")?;
    tracing::debug!(path = %path.display(), count = events.len(), "Loaded events");

    Ok(events)
}

/// The events a listing shows: optionally windowed to upcoming sessions,
/// then filtered and sorted.
pub fn select(events: &[Event], filters: &FilterArgs, config: &RinksideConfig) -> Vec<Event> {
    select_at(events, filters, config, chrono::Local::now().naive_local())
}

/// `select` with the upcoming window measured from `now`.
pub fn select_at(
    events: &[Event],
    filters: &FilterArgs,
    config: &RinksideConfig,
    now: NaiveDateTime,
) -> Vec<Event> {
    let spec = filters.to_spec(config);

    if filters.upcoming {
        let prepared = feed::prepare(events, now, config.upcoming_window());
        query(&prepared, &spec)
    } else {
        query(events, &spec)
    }
}

/// Pick the Nth (1-based) event from a listing.
pub fn pick(events: Vec<Event>, index: usize) -> Result<Event> {
    let count = events.len();
    index
        .checked_sub(1)
        .and_then(|i| events.into_iter().nth(i))
        .with_context(|| format!("No event #{} (listing has {} events)", index, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rinkside_core::event::{Address, Arena, Cost, EventType};

    fn event(city: &str, start: &str, cost: Option<f64>) -> Event {
        Event {
            event_type: EventType::OpenSkate,
            arena: Arena {
                name: format!("{} Arena", city),
                address: Address {
                    street: "1 Rink Rd".to_string(),
                    city: city.to_string(),
                    state: "MN".to_string(),
                    zip_code: "55000".to_string(),
                },
                notes: None,
            },
            start_time: start.to_string(),
            end_time: start.to_string(),
            notes: None,
            cost: cost.map(|c| Cost { cost: Some(c) }),
        }
    }

    #[test]
    fn test_to_spec_uses_config_default_sort() {
        let config = RinksideConfig {
            default_sort: SortBy::CostAsc,
            ..Default::default()
        };
        let spec = FilterArgs::default().to_spec(&config);
        assert_eq!(spec.sort_by, SortBy::CostAsc);
        assert!(spec.city.is_none());
    }

    #[test]
    fn test_flags_override_query_string() {
        let filters = FilterArgs {
            city: Some("Burnsville".to_string()),
            query: Some("city=Eagan&date=2024-01-06&sort=cost-desc".to_string()),
            ..Default::default()
        };
        let spec = filters.to_spec(&RinksideConfig::default());

        assert_eq!(spec.city(), Some("Burnsville"));
        assert_eq!(spec.date(), Some("2024-01-06"));
        assert_eq!(spec.sort_by, SortBy::CostDesc);
    }

    #[test]
    fn test_query_string_without_sort_keeps_config_sort() {
        let config = RinksideConfig {
            default_sort: SortBy::CostAsc,
            ..Default::default()
        };
        let filters = FilterArgs {
            query: Some("city=Eagan".to_string()),
            ..Default::default()
        };
        let spec = filters.to_spec(&config);

        assert_eq!(spec.city(), Some("Eagan"));
        assert_eq!(spec.sort_by, SortBy::CostAsc);
    }

    #[test]
    fn test_select_upcoming_windows_before_filtering() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 6)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let events: Vec<Event> = [
            ("Eagan", "2024-01-05 13:00:00", Some(1.0)),
            ("Eagan", "2024-01-07 09:00:00", Some(8.0)),
            ("Burnsville", "2024-01-06 18:00:00", Some(2.0)),
            ("Eagan", "2024-01-06 19:00:00", None),
            ("Eagan", "2024-01-06 15:00:00", Some(6.0)),
            ("Eagan", "2024-01-06 15:00:00", Some(6.0)),
            ("Eagan", "2024-01-12 10:00:00", Some(3.0)),
        ]
        .into_iter()
        .map(|(city, start, cost)| event(city, start, cost))
        .collect();

        let filters = FilterArgs {
            city: Some("Eagan".to_string()),
            sort: Some(SortBy::CostAsc),
            upcoming: true,
            ..Default::default()
        };
        let shown = select_at(&events, &filters, &RinksideConfig::default(), now);

        let starts: Vec<&str> = shown.iter().map(|e| e.start_time.as_str()).collect();
        assert_eq!(
            starts,
            vec![
                "2024-01-06 15:00:00",
                "2024-01-07 09:00:00",
                "2024-01-06 19:00:00",
            ]
        );

        let everything = FilterArgs {
            upcoming: false,
            ..filters
        };
        assert_eq!(
            select_at(&events, &everything, &RinksideConfig::default(), now).len(),
            6
        );
    }

    #[tokio::test]
    async fn test_load_events_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_events(&dir.path().join("events.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to load events"));
    }

    #[tokio::test]
    async fn test_load_events_and_pick() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[{
                "arena": {"name": "Kwik Trip Arena", "address": {"street": "1 Main St", "city": "Rosemount", "state": "MN", "zip_code": "55068"}},
                "event_type": "Open Skate",
                "start_time": "2024-01-06 13:00:00",
                "end_time": "2024-01-06 14:00:00"
            }]"#,
        )
        .unwrap();

        let events = load_events(&path).await.unwrap();
        assert_eq!(pick(events.clone(), 1).unwrap().city(), "Rosemount");
        assert!(pick(events.clone(), 0).is_err());
        assert!(pick(events, 2).is_err());
    }
}
