//! Filter and sort choices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Feed order, which is already chronological.
    #[default]
    Time,
    CostAsc,
    CostDesc,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Time => "time",
            SortBy::CostAsc => "cost-asc",
            SortBy::CostDesc => "cost-desc",
        }
    }

    /// Sort key for a possibly unknown cost.
    ///
    /// Unknown is +inf ascending and -1 descending, so it lands last in
    /// both directions. A real cost below -1 sorts after unknown when
    /// descending.
    pub fn cost_key(&self, cost: Option<f64>) -> f64 {
        match self {
            SortBy::CostDesc => cost.unwrap_or(-1.0),
            SortBy::Time | SortBy::CostAsc => cost.unwrap_or(f64::INFINITY),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(SortBy::Time),
            "cost-asc" => Ok(SortBy::CostAsc),
            "cost-desc" => Ok(SortBy::CostDesc),
            other => Err(format!(
                "Unknown sort '{}'. Expected time, cost-asc or cost-desc",
                other
            )),
        }
    }
}

/// The active filter/sort choices for one query.
///
/// `None` and `Some("")` both mean "don't filter on this".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub city: Option<String>,
    /// `YYYY-MM-DD`, matched as a prefix of `start_time`.
    pub date: Option<String>,
    pub event_type: Option<String>,
    pub sort_by: SortBy,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl FilterSpec {
    pub fn city(&self) -> Option<&str> {
        non_empty(&self.city)
    }

    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    pub fn event_type(&self) -> Option<&str> {
        non_empty(&self.event_type)
    }

    /// Whether anything differs from "show everything in feed order".
    pub fn is_active(&self) -> bool {
        self.city().is_some()
            || self.date().is_some()
            || self.event_type().is_some()
            || self.sort_by != SortBy::Time
    }

    /// Read filter state from a URL query string (`city`, `date`, `type`,
    /// `sort`). A leading `?` is ignored; an unrecognised sort falls back to
    /// `time`.
    pub fn from_query(query: &str) -> Self {
        let mut spec = FilterSpec::default();
        spec.apply_query(query);
        spec
    }

    /// Overwrite the choices named in `query`, leaving the others as they are.
    pub fn apply_query(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.into_owned();
            match &*key {
                "city" => self.city = Some(value),
                "date" => self.date = Some(value),
                "type" => self.event_type = Some(value),
                "sort" => self.sort_by = value.parse().unwrap_or_default(),
                _ => {}
            }
        }
    }

    /// Write filter state as a URL query string, without the leading `?`.
    /// Empty criteria and the default sort are left out.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if let Some(city) = self.city() {
            serializer.append_pair("city", city);
        }
        if let Some(date) = self.date() {
            serializer.append_pair("date", date);
        }
        if let Some(event_type) = self.event_type() {
            serializer.append_pair("type", event_type);
        }
        if self.sort_by != SortBy::Time {
            serializer.append_pair("sort", self.sort_by.as_str());
        }

        serializer.finish()
    }
}
