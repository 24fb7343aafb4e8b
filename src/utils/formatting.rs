//! Formatting utilities used for CLI and export outputs.

/// Render fractional hours as "8.50 h" (two decimals).
pub fn hours2readable(hours: f64) -> String {
    format!("{:.2} h", hours)
}

/// Strip seconds from an `HH:MM:SS` value for compact table cells.
pub fn short_time(t: &str) -> &str {
    if t.len() >= 5 { &t[..5] } else { t }
}
