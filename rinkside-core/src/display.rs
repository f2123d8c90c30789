//! Text helpers for rendering event cards and filter choices.

use chrono::NaiveDate;
use url::form_urlencoded;

use crate::event::{Address, Event, format_amount, parse_local_time};

const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Map search link for an arena address.
pub fn map_link(address: &Address) -> String {
    let query: String = form_urlencoded::byte_serialize(address.one_line().as_bytes()).collect();
    format!("{}{}", MAP_SEARCH_URL, query)
}

/// Short label for a `YYYY-MM-DD` date facet (e.g. "Sat, Jan 6").
/// Anything that isn't a date is shown as-is.
pub fn date_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%a, %b %-d").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Start/end display text (e.g. "1/6/2024, 1:00 PM").
pub fn time_label(raw: &str) -> String {
    match parse_local_time(raw) {
        Some(dt) => dt.format("%-m/%-d/%Y, %-I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

pub fn cost_label(event: &Event) -> String {
    match event.known_cost() {
        Some(cost) => format!("${}", format_amount(cost)),
        None => "Cost Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::fixtures::eagan_open_skate;

    #[test]
    fn test_map_link() {
        let event = eagan_open_skate();
        assert_eq!(
            map_link(&event.arena.address),
            "https://www.google.com/maps/search/?api=1&query=3870+Pilot+Knob+Rd%2C+Eagan%2C+MN+55122"
        );
    }

    #[test]
    fn test_date_label() {
        assert_eq!(date_label("2024-01-06"), "Sat, Jan 6");
        assert_eq!(date_label("2024-11-28"), "Thu, Nov 28");
        assert_eq!(date_label("soon"), "soon");
    }

    #[test]
    fn test_time_label() {
        assert_eq!(time_label("2024-01-06 13:00:00"), "1/6/2024, 1:00 PM");
        assert_eq!(time_label("2024-01-06 09:05"), "1/6/2024, 9:05 AM");
        assert_eq!(time_label("whenever"), "whenever");
    }

    #[test]
    fn test_cost_label() {
        let mut event = eagan_open_skate();
        assert_eq!(cost_label(&event), "$7.5");
        event.cost = None;
        assert_eq!(cost_label(&event), "Cost Unknown");
    }
}
