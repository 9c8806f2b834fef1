//! Timestamp rendering shared by the team listing.

use chrono::DateTime;

/// Placeholder rendered when a team has no usable `createdAt`.
pub const UNKNOWN_TIMESTAMP: &str = "(unknown)";

/// Render epoch milliseconds as `YYYY-MM-DD HH:MM:SS UTC`.
///
/// Sub-second precision is dropped. Consumers parse this exact shape.
/// Returns `None` when the value is outside chrono's representable range.
pub fn format_timestamp(epoch_ms: i64) -> Option<String> {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

/// [`format_timestamp`] for an optional `createdAt`, with [`UNKNOWN_TIMESTAMP`]
/// standing in for missing or unrepresentable values.
pub fn format_created_at(created_at: Option<i64>) -> String {
    created_at
        .and_then(format_timestamp)
        .unwrap_or_else(|| UNKNOWN_TIMESTAMP.to_string())
}
