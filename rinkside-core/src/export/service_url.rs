//! "Add to Google Calendar" links.

use url::form_urlencoded;

use super::{compact_timestamp, description_lines, location};
use crate::event::Event;

pub const CALENDAR_SERVICE_URL: &str = "https://calendar.google.com/calendar/render";

/// Build a calendar-service template link for `event`.
///
/// Parameters are form-urlencoded. `details` is always sent, empty when the
/// event has neither notes nor a known cost.
pub fn to_calendar_service_url(event: &Event) -> String {
    let dates = format!(
        "{}/{}",
        compact_timestamp(&event.start_time),
        compact_timestamp(&event.end_time)
    );

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("action", "TEMPLATE")
        .append_pair("text", &event.summary())
        .append_pair("dates", &dates)
        .append_pair("location", &location(event))
        .append_pair("details", &description_lines(event).join("\n"))
        .finish();

    format!("{}?{}", CALENDAR_SERVICE_URL, query)
}
