//! Time labels for displayed messages

use chrono::{DateTime, Local, TimeZone, Utc};

/// Format an instant as a local `HH:MM` label.
pub fn format_time(at: DateTime<Utc>) -> String {
    format_time_in(at, &Local)
}

/// Format an instant as `HH:MM` in the given zone.
pub fn format_time_in<Tz>(at: DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(zone).format("%H:%M").to_string()
}
