//! Cell formatting rules shared by every exported column.

use chrono::{DateTime, SecondsFormat, Utc};

/// Rates, scores and prices.
pub fn decimal(value: f64) -> String {
    format!("{value:.2}")
}

/// Latitude and longitude.
pub fn coordinate(value: f64) -> String {
    format!("{value:.6}")
}

/// RFC 3339 in UTC with second precision, e.g. `2024-01-01T12:00:00Z`.
pub fn timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Absent values always render as an empty cell.
pub fn optional<T>(value: Option<T>, render: impl FnOnce(T) -> String) -> String {
    value.map(render).unwrap_or_default()
}
