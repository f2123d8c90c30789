//! Event feed decoding and the server-side preparation pass.
//!
//! The events endpoint serves a JSON array that has already been cut down
//! to an upcoming window, de-duplicated and ordered by start time. `prepare`
//! performs the same pass so a raw list can be served or displayed the same
//! way.

use chrono::{Duration, NaiveDateTime};

use crate::error::RinksideResult;
use crate::event::Event;

/// How far ahead the feed looks by default.
pub const DEFAULT_WINDOW_HOURS: i64 = 48;

/// Decode a JSON array of events.
pub fn parse_feed(json: &str) -> RinksideResult<Vec<Event>> {
    let events: Vec<Event> = serde_json::from_str(json)?;
    tracing::debug!(count = events.len(), "Decoded event feed");
    Ok(events)
}

/// Encode events as a JSON array in feed format.
pub fn to_feed_json(events: &[Event]) -> RinksideResult<String> {
    Ok(serde_json::to_string_pretty(events)?)
}

/// Events starting within `[now, now + window]`. Events whose start time
/// can't be parsed can't be placed in the window and are dropped. A window
/// reaching past the last representable time is open-ended.
pub fn upcoming(events: &[Event], now: NaiveDateTime, window: Duration) -> Vec<Event> {
    let until = now
        .checked_add_signed(window)
        .unwrap_or(NaiveDateTime::MAX);

    events
        .iter()
        .filter(|e| match e.start() {
            Some(start) => start >= now && start <= until,
            None => {
                tracing::warn!(
                    start_time = %e.start_time,
                    "Dropping event with unparseable start time"
                );
                false
            }
        })
        .cloned()
        .collect()
}

/// Remove exact duplicates, keeping the first occurrence.
pub fn dedupe(events: Vec<Event>) -> Vec<Event> {
    let mut unique: Vec<Event> = Vec::with_capacity(events.len());
    for event in events {
        if !unique.contains(&event) {
            unique.push(event);
        }
    }
    unique
}

/// Stable sort by start time. Unparseable starts go last, in their
/// original order.
pub fn sort_by_start(events: &mut [Event]) {
    events.sort_by_key(|e| (e.start().is_none(), e.start()));
}

/// Window, de-duplicate and order a raw event list.
pub fn prepare(events: &[Event], now: NaiveDateTime, window: Duration) -> Vec<Event> {
    let in_window = upcoming(events, now, window);
    let windowed = in_window.len();

    let mut prepared = dedupe(in_window);
    sort_by_start(&mut prepared);

    tracing::debug!(
        total = events.len(),
        windowed,
        prepared = prepared.len(),
        "Prepared event feed"
    );

    prepared
}
