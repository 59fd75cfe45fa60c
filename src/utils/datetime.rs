//! Date and time utility functions
//!
//! Backend timestamps arrive as ISO-8601 text. They are shown in local time.

use chrono::{DateTime, Local, NaiveDateTime};

/// Parse an ISO-8601 timestamp into local time
///
/// Accepts RFC 3339 (`2025-01-15T10:30:00Z`, `...+02:00`) and naive
/// timestamps without an offset, which are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc().with_timezone(&Local))
}

/// Format a creation timestamp for display
///
/// # Returns
/// * empty string when absent, the raw text when unparsable, otherwise the
///   local time rendered with `format`
pub fn format_created_at(value: Option<&str>, format: &str) -> String {
    match value {
        None => String::new(),
        Some(raw) if raw.trim().is_empty() => String::new(),
        Some(raw) => match parse_timestamp(raw) {
            Some(dt) => dt.format(format).to_string(),
            None => raw.to_string(),
        },
    }
}
