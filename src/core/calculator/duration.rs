//! Elapsed-hours computation between two clock times on a reference day.

use crate::core::calculator::normalize::time_parts;

const SECONDS_PER_DAY: i64 = 86_400;

fn seconds_of_day(t: &str) -> Option<i64> {
    let (h, m, s) = time_parts(t)?;
    Some(i64::from(h) * 3600 + i64::from(m) * 60 + i64::from(s))
}

/// Fractional hours between `start` and `stop`.
///
/// A stop instant strictly earlier than the start instant is taken to be
/// on the following day (shifts crossing midnight), so the result is
/// never negative. Malformed input yields 0.0; callers sum these values
/// and one dirty record must not poison an aggregate total.
pub fn hours_between(start: &str, stop: &str) -> f64 {
    let (Some(a), Some(b)) = (seconds_of_day(start), seconds_of_day(stop)) else {
        return 0.0;
    };

    let mut diff = b - a;
    if diff < 0 {
        diff += SECONDS_PER_DAY;
    }

    diff as f64 / 3600.0
}

/// Variant over optional fields: any missing side contributes 0.
pub fn hours_between_opt(start: Option<&str>, stop: Option<&str>) -> f64 {
    match (start, stop) {
        (Some(a), Some(b)) => hours_between(a, b),
        _ => 0.0,
    }
}
