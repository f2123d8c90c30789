//! Import sessions from an arena's published `.ics` calendar.
//!
//! City calendars list everything happening at a facility; a rule picks out
//! the sessions we list (e.g. entries mentioning "Open Skate - All Ages")
//! and says what kind of session they are.

use chrono::{Duration, Local, NaiveDateTime, TimeZone};
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};

use crate::error::{RinksideError, RinksideResult};
use crate::event::{Arena, Cost, Event, EventType, TIME_FORMAT};

/// Which calendar entries to import and how to read them.
#[derive(Debug, Clone)]
pub struct ImportRule {
    /// Entries whose description or summary contains this text are imported.
    pub marker: String,
    pub event_type: EventType,
    /// Description line prefix that carries the price, e.g. `Admission: $5`.
    pub cost_label: String,
}

impl ImportRule {
    pub fn new(marker: impl Into<String>, event_type: EventType) -> Self {
        ImportRule {
            marker: marker.into(),
            event_type,
            cost_label: "Admission".to_string(),
        }
    }
}

/// Parse `ics` and turn every matching timed VEVENT into an `Event` at
/// `arena`. All-day entries are skipped.
pub fn import_events(ics: &str, arena: &Arena, rule: &ImportRule) -> RinksideResult<Vec<Event>> {
    let unfolded = unfold(ics);
    if !unfolded.trim_start().starts_with("BEGIN:VCALENDAR") {
        return Err(RinksideError::IcsParse(
            "Expected BEGIN:VCALENDAR at start of calendar".to_string(),
        ));
    }
    let calendar = read_calendar(&unfolded).map_err(|e| RinksideError::IcsParse(e.to_string()))?;

    let events: Vec<Event> = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .filter_map(|vevent| import_vevent(vevent, arena, rule))
        .collect();

    tracing::debug!(
        arena = %arena.name,
        imported = events.len(),
        "Imported events from calendar"
    );

    Ok(events)
}

fn import_vevent(vevent: &Component, arena: &Arena, rule: &ImportRule) -> Option<Event> {
    let summary = prop_text(vevent, "SUMMARY").unwrap_or_default();
    let description = prop_text(vevent, "DESCRIPTION").unwrap_or_default();
    let summary = summary.trim_end();
    let description = description.trim_end();

    if !description.contains(&rule.marker) && !summary.contains(&rule.marker) {
        return None;
    }

    let start = vevent
        .find_prop("DTSTART")
        .and_then(|p| DatePerhapsTime::try_from(p).ok())
        .and_then(to_local);
    let end = match vevent.find_prop("DTEND") {
        Some(p) => DatePerhapsTime::try_from(p).ok().and_then(to_local),
        None => {
            let duration = prop_text(vevent, "DURATION").and_then(|d| parse_duration(&d));
            start.zip(duration).and_then(|(s, d)| s.checked_add_signed(d))
        }
    };

    let (Some(start), Some(end)) = (start, end) else {
        tracing::warn!(summary, "Skipping calendar entry without timed start/end");
        return None;
    };

    let notes = if description.is_empty() {
        summary.to_string()
    } else {
        description.replace('\n', " - ")
    };

    Some(Event {
        event_type: rule.event_type.clone(),
        arena: arena.clone(),
        start_time: start.format(TIME_FORMAT).to_string(),
        end_time: end.format(TIME_FORMAT).to_string(),
        notes: Some(notes),
        cost: Some(Cost {
            cost: parse_cost(description, &rule.cost_label),
        }),
    })
}

fn prop_text(component: &Component, name: &str) -> Option<String> {
    component
        .find_prop(name)
        .map(|p| unescape_text(&p.val.to_string()))
}

/// Undo RFC 5545 TEXT escaping.
fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Convert a calendar time to the local wall clock. Dates without a time
/// have no place in the listing.
fn to_local(dpt: DatePerhapsTime) -> Option<NaiveDateTime> {
    match dpt {
        DatePerhapsTime::Date(_) => None,
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Floating(naive) => Some(naive),
            CalendarDateTime::Utc(dt) => Some(dt.with_timezone(&Local).naive_local()),
            CalendarDateTime::WithTimezone { date_time, tzid } => {
                match tzid.parse::<chrono_tz::Tz>() {
                    Ok(tz) => tz
                        .from_local_datetime(&date_time)
                        .earliest()
                        .map(|dt| dt.with_timezone(&Local).naive_local()),
                    Err(_) => {
                        tracing::warn!(tzid = %tzid, "Unknown TZID, treating time as local");
                        Some(date_time)
                    }
                }
            }
        },
    }
}

/// A non-negative DURATION value such as `PT1H30M`.
fn parse_duration(value: &str) -> Option<Duration> {
    let duration = iso8601::duration(value.trim()).ok()?;
    let std_duration: std::time::Duration = duration.into();
    Duration::from_std(std_duration).ok()
}

/// Pull a price out of a line like `Admission: $5.00 & up / person`.
fn parse_cost(description: &str, label: &str) -> Option<f64> {
    let line = description.lines().find(|l| l.contains(label))?;
    let value = line
        .split(':')
        .nth(1)?
        .trim()
        .split('&')
        .next()?
        .trim()
        .split('/')
        .next()?
        .trim()
        .replace('$', "");

    value.parse().ok()
}
