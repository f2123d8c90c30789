//! Terminal rendering for rinkside types.
//!
//! Extension traits that add colored output to rinkside-core types using
//! owo_colors.

use owo_colors::OwoColorize;
use rinkside_core::display::{cost_label, date_label, map_link, time_label};
use rinkside_core::event::Event;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("{}", self.arena.name.bold()),
            format!("   {}", map_link(&self.arena.address).dimmed()),
            format!("   City:       {}", self.city()),
            format!("   Event Type: {}", self.event_type),
            format!("   Start:      {}", time_label(&self.start_time)),
            format!("   End:        {}", time_label(&self.end_time)),
        ];

        let cost = cost_label(self);
        if self.known_cost().is_some() {
            lines.push(format!("   Cost:       {}", cost.green()));
        } else {
            lines.push(format!("   Cost:       {}", cost.dimmed()));
        }

        if let Some(notes) = self.notes() {
            lines.push(format!("   {}", notes.italic()));
        }

        lines.join("\n")
    }
}

/// Numbered listing, with a blank line between cards.
pub fn render_listing(events: &[Event]) -> String {
    events
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let number = format!("{:>3}.", i + 1);
            format!("{} {}", number.dimmed(), event.render())
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// "Showing 3 of 12 events"
pub fn render_count(shown: usize, total: usize) -> String {
    format!("Showing {} of {} {}", shown, total, pluralize("event", total))
}

/// A date facet with its short label, e.g. "2024-01-06  Sat, Jan 6".
pub fn render_date_facet(date: &str) -> String {
    format!("{}  {}", date, date_label(date).dimmed())
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
