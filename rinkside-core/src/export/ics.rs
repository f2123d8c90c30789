//! `.ics` payload generation.
//!
//! Written line by line rather than through the icalendar builder, which
//! would add UID/DTSTAMP, escape commas and fold long lines.

use super::{compact_timestamp, description_lines, location};
use crate::event::Event;

pub const PRODID: &str = "-//HockeyEvents//EN";

/// Generate a single-event calendar file.
///
/// Lines are joined with CRLF; there is no trailing line break after
/// `END:VCALENDAR`. Values are not escaped, except that description lines
/// are joined with the ICS `\n` escape.
pub fn to_calendar_file(event: &Event) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
        "BEGIN:VEVENT".to_string(),
        format!("DTSTART:{}", compact_timestamp(&event.start_time)),
        format!("DTEND:{}", compact_timestamp(&event.end_time)),
        format!("SUMMARY:{}", event.summary()),
        format!("LOCATION:{}", location(event)),
    ];

    let description = description_lines(event);
    if !description.is_empty() {
        lines.push(format!("DESCRIPTION:{}", description.join("\\n")));
    }

    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());

    lines.join("\r\n")
}
