//! Filtering, sorting and facet lists over an in-memory event list.
//!
//! Everything here is a pure function of its inputs. Nothing parses
//! `start_time`, so a malformed timestamp can't derail a query.

mod filter_spec;

pub use filter_spec::{FilterSpec, SortBy};

use std::collections::BTreeSet;

use crate::event::Event;

/// Apply `spec` to `events`: keep the events that pass every criterion that
/// is set, then order them.
pub fn query(events: &[Event], spec: &FilterSpec) -> Vec<Event> {
    let mut selected: Vec<Event> = events
        .iter()
        .filter(|e| matches(e, spec))
        .cloned()
        .collect();

    sort_events(&mut selected, spec.sort_by);

    tracing::debug!(
        total = events.len(),
        selected = selected.len(),
        sort = %spec.sort_by,
        "Queried events"
    );

    selected
}

/// Whether a single event passes every active criterion.
pub fn matches(event: &Event, spec: &FilterSpec) -> bool {
    let city_ok = spec.city().is_none_or(|city| event.city() == city);
    let date_ok = spec
        .date()
        .is_none_or(|date| event.start_time.starts_with(date));
    let type_ok = spec
        .event_type()
        .is_none_or(|t| event.event_type.as_str() == t);

    city_ok && date_ok && type_ok
}

/// Stable sort in place. `Time` leaves feed order alone.
pub fn sort_events(events: &mut [Event], sort_by: SortBy) {
    match sort_by {
        SortBy::Time => {}
        SortBy::CostAsc => events.sort_by(|a, b| {
            sort_by
                .cost_key(a.known_cost())
                .total_cmp(&sort_by.cost_key(b.known_cost()))
        }),
        SortBy::CostDesc => events.sort_by(|a, b| {
            sort_by
                .cost_key(b.known_cost())
                .total_cmp(&sort_by.cost_key(a.known_cost()))
        }),
    }
}

/// Unique arena cities, ascending.
pub fn distinct_cities(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .map(|e| e.city().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Unique start dates (`YYYY-MM-DD`), ascending.
pub fn distinct_dates(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .map(|e| e.start_date().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
