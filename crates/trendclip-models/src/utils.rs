//! Display formatting helpers.

/// Format a count in compact social-media style: 12500000 -> "12.5M",
/// 8700 -> "8.7K", 999 -> "999".
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Format a duration in seconds as "m:ss".
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
