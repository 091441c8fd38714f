//! Small formatting helpers.

use chrono::DateTime;

/// Placeholder for absent values in table cells.
pub const PLACEHOLDER: &str = "—";

/// Format an ISO-8601 timestamp as e.g. "Jun 28, 2025".
///
/// Missing or unparseable timestamps render as the placeholder dash; a bad
/// date never fails a whole row.
pub fn format_date(iso: Option<&str>) -> String {
    let Some(iso) = iso else {
        return PLACEHOLDER.to_string();
    };
    match DateTime::parse_from_rfc3339(iso) {
        Ok(timestamp) => timestamp.format("%b %-d, %Y").to_string(),
        Err(_) => PLACEHOLDER.to_string(),
    }
}

/// Truncate to at most `max_chars` characters, appending an ellipsis.
/// Approximates the table's two-line description clamp.
pub fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let mut truncated: String = value.chars().take(max_chars).collect();
        truncated.push('…');
        truncated
    }
}
