//! Event feed types.
//!
//! These mirror the JSON records the events endpoint serves. Times are kept
//! as the raw strings from the feed so a malformed value never prevents the
//! rest of the list from loading; use `Event::start`/`Event::end` to get a
//! parsed value.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Formats accepted for `start_time`/`end_time`, tried in order.
const TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Format used when writing times back out (e.g. from ICS import).
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One scheduled session at an arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_type: EventType,
    pub arena: Arena,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub cost: Option<Cost>,
}

/// A venue with a name and postal address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub name: String,
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Admission cost. A missing record and a null amount both mean "unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    #[serde(default)]
    pub cost: Option<f64>,
}

/// Kind of session. The feed is open-ended: anything that isn't one of the
/// known kinds is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    OpenSkate,
    StickAndPuck,
    Other(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::OpenSkate => "Open Skate",
            EventType::StickAndPuck => "Stick and Puck",
            EventType::Other(s) => s,
        }
    }
}

impl From<String> for EventType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Open Skate" => EventType::OpenSkate,
            "Stick and Puck" => EventType::StickAndPuck,
            _ => EventType::Other(s),
        }
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        EventType::from(s.to_string())
    }
}

impl From<EventType> for String {
    fn from(t: EventType) -> Self {
        match t {
            EventType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Address {
    /// `"<street>, <city>, <state> <zip>"`
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.zip_code
        )
    }
}

impl Event {
    pub fn start(&self) -> Option<NaiveDateTime> {
        parse_local_time(&self.start_time)
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        parse_local_time(&self.end_time)
    }

    /// Date portion of `start_time` (everything before the first space).
    pub fn start_date(&self) -> &str {
        self.start_time
            .split(' ')
            .next()
            .unwrap_or(&self.start_time)
    }

    pub fn city(&self) -> &str {
        &self.arena.address.city
    }

    pub fn known_cost(&self) -> Option<f64> {
        self.cost.as_ref().and_then(|c| c.cost)
    }

    /// Notes, if there is anything in them.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }

    /// `"<event_type> - <arena name>"`
    pub fn summary(&self) -> String {
        format!("{} - {}", self.event_type, self.arena.name)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// Parse a feed timestamp as a local (floating) date-time.
pub fn parse_local_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Render an amount the way the feed's consumers print numbers
/// (`10`, `7.5`), without a trailing `.0`.
pub fn format_amount(amount: f64) -> String {
    amount.to_string()
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_deserialize_feed_record() {
        let json = r#"{
            "arena": {
                "name": "Burnsville Ice Center",
                "address": {"street": "251 Civic Center Pkwy", "city": "Burnsville", "state": "MN", "zip_code": "55337"},
                "notes": ""
            },
            "event_type": "Stick and Puck",
            "start_time": "2024-01-06 09:00",
            "end_time": "2024-01-06 10:20",
            "notes": "",
            "cost": {"cost": 10.0}
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, EventType::StickAndPuck);
        assert_eq!(event.city(), "Burnsville");
        assert_eq!(event.known_cost(), Some(10.0));
        assert_eq!(event.notes(), None, "empty notes should read as absent");
        assert_eq!(
            event.start(),
            NaiveDate::from_ymd_opt(2024, 1, 6)
                .unwrap()
                .and_hms_opt(9, 0, 0)
        );
    }

    #[test]
    fn test_missing_optional_fields() {
        let json = r#"{
            "arena": {"name": "X", "address": {"street": "s", "city": "c", "state": "MN", "zip_code": "1"}},
            "event_type": "Broomball",
            "start_time": "2024-01-06 09:00:00",
            "end_time": "2024-01-06 10:00:00",
            "cost": {"cost": null}
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, EventType::Other("Broomball".to_string()));
        assert_eq!(event.known_cost(), None);
        assert_eq!(event.notes, None);
    }

    #[test]
    fn test_event_type_round_trips_through_string() {
        let json = serde_json::to_string(&EventType::OpenSkate).unwrap();
        assert_eq!(json, "\"Open Skate\"");
        let other: EventType = serde_json::from_str("\"Learn to Skate\"").unwrap();
        assert_eq!(other.to_string(), "Learn to Skate");
    }

    #[test]
    fn test_malformed_start_time_still_loads() {
        let mut event = fixtures::eagan_open_skate();
        event.start_time = "sometime soon".to_string();
        assert_eq!(event.start(), None);
        assert_eq!(event.start_date(), "sometime");
    }

    #[test]
    fn test_summary_and_address() {
        let event = fixtures::eagan_open_skate();
        assert_eq!(event.summary(), "Open Skate - Eagan Civic Center");
        assert_eq!(
            event.arena.address.one_line(),
            "3870 Pilot Knob Rd, Eagan, MN 55122"
        );
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(10.0), "10");
        assert_eq!(format_amount(7.5), "7.5");
    }
}
