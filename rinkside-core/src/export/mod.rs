//! Calendar export: `.ics` payloads and "add to calendar" links.
//!
//! Both forms are derived from the same pieces (compact timestamps,
//! location line, description lines) so they always agree.

mod ics;
mod service_url;

pub use ics::{PRODID, to_calendar_file};
pub use service_url::{CALENDAR_SERVICE_URL, to_calendar_service_url};

use std::path::{Path, PathBuf};

use crate::error::RinksideResult;
use crate::event::{Event, format_amount, parse_local_time};

/// `YYYYMMDDTHHMM00` in the event's own local time. Seconds are always
/// written as `00`.
///
/// Input that doesn't parse is passed through with `-`/`:` removed and the
/// date/time space turned into `T`.
pub fn compact_timestamp(raw: &str) -> String {
    match parse_local_time(raw) {
        Some(dt) => dt.format("%Y%m%dT%H%M00").to_string(),
        None => {
            tracing::warn!(raw, "Unparseable event time, exporting as-is");
            raw.trim()
                .chars()
                .filter(|c| *c != '-' && *c != ':')
                .map(|c| if c == ' ' { 'T' } else { c })
                .collect()
        }
    }
}

/// `"<arena name>, <street>, <city>, <state> <zip>"`
pub fn location(event: &Event) -> String {
    format!("{}, {}", event.arena.name, event.arena.address.one_line())
}

/// Notes and cost, whichever are present, in that order.
fn description_lines(event: &Event) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(notes) = event.notes() {
        lines.push(notes.to_string());
    }
    if let Some(cost) = event.known_cost() {
        lines.push(format!("Cost: ${}", format_amount(cost)));
    }
    lines
}

/// File name for a downloaded `.ics`: event type and arena name with each
/// run of whitespace replaced by `_`.
pub fn calendar_file_name(event: &Event) -> String {
    format!(
        "{}_{}.ics",
        underscore_whitespace(event.event_type.as_str()),
        underscore_whitespace(&event.arena.name)
    )
}

fn underscore_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_space = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Write the `.ics` payload into `dir` under `calendar_file_name`.
pub fn write_calendar_file(event: &Event, dir: &Path) -> RinksideResult<PathBuf> {
    let path = dir.join(calendar_file_name(event));
    std::fs::write(&path, to_calendar_file(event))?;
    tracing::debug!(path = %path.display(), "Wrote calendar file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::fixtures::eagan_open_skate;

    #[test]
    fn test_compact_timestamp() {
        assert_eq!(compact_timestamp("2024-01-06 13:00:00"), "20240106T130000");
        assert_eq!(compact_timestamp("2024-01-06 09:05"), "20240106T090500");
    }

    #[test]
    fn test_compact_timestamp_drops_seconds() {
        assert_eq!(compact_timestamp("2024-01-06 13:45:30"), "20240106T134500");
    }

    #[test]
    fn test_compact_timestamp_degrades_on_bad_input() {
        assert_eq!(compact_timestamp("2024-13-45 25:00"), "20241345T2500");
    }

    #[test]
    fn test_location() {
        assert_eq!(
            location(&eagan_open_skate()),
            "Eagan Civic Center, 3870 Pilot Knob Rd, Eagan, MN 55122"
        );
    }

    #[test]
    fn test_description_lines() {
        let mut event = eagan_open_skate();
        assert_eq!(
            description_lines(&event),
            vec!["All ages welcome", "Cost: $7.5"]
        );

        event.notes = Some(String::new());
        event.cost = None;
        assert!(description_lines(&event).is_empty());
    }

    #[test]
    fn test_calendar_file_name() {
        let mut event = eagan_open_skate();
        assert_eq!(
            calendar_file_name(&event),
            "Open_Skate_Eagan_Civic_Center.ics"
        );

        event.arena.name = "Hasse  Arena\t2".to_string();
        assert_eq!(calendar_file_name(&event), "Open_Skate_Hasse_Arena_2.ics");
    }

    #[test]
    fn test_write_calendar_file() {
        let dir = tempfile::tempdir().unwrap();
        let event = eagan_open_skate();

        let path = write_calendar_file(&event, dir.path()).unwrap();

        assert_eq!(path, dir.path().join("Open_Skate_Eagan_Civic_Center.ics"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_calendar_file(&event));
    }
}
