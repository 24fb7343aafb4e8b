//! Date-keyed aggregation over action lists.

use crate::core::calculator::duration::{hours_between, hours_between_opt};
use crate::models::action::Action;
use crate::models::daily::DailyAggregate;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashMap;

/// `(year, month, day)` sort key of a dotted date, if it parses.
fn chrono_key(date: &str) -> Option<(i32, u32, u32)> {
    let mut it = date.split('.');
    let d: u32 = it.next()?.parse().ok()?;
    let m: u32 = it.next()?.parse().ok()?;
    let y: i32 = it.next()?.parse().ok()?;
    if it.next().is_some() {
        return None;
    }
    // reject 31.02.* and friends
    NaiveDate::from_ymd_opt(y, m, d)?;
    Some((y, m, d))
}

/// Chronological ordering of dotted date strings. Lexical comparison is
/// wrong here ("02.01.2025" < "01.02.2025" must hold); unparseable dates
/// sort after every valid one, lexically among themselves.
pub fn compare_dates(a: &str, b: &str) -> Ordering {
    match (chrono_key(a), chrono_key(b)) {
        (Some(ka), Some(kb)) => ka.cmp(&kb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Group actions by their literal date string, summing planned and real
/// hours per day. Output is ascending chronological regardless of input
/// order.
pub fn group_by_date(actions: &[Action]) -> Vec<DailyAggregate> {
    let mut grouped: HashMap<&str, DailyAggregate> = HashMap::new();

    for action in actions {
        let entry = grouped
            .entry(action.date.as_str())
            .or_insert_with(|| DailyAggregate::new(&action.date));

        entry.system_hours += hours_between(&action.system_start, &action.system_end);
        entry.real_hours +=
            hours_between_opt(action.real_start.as_deref(), action.real_end.as_deref());
    }

    let mut days: Vec<DailyAggregate> = grouped.into_values().collect();
    days.sort_by(|a, b| compare_dates(&a.date, &b.date));
    days
}

/// `"MM.YYYY"` month key of a dotted date; None when the string does not
/// have exactly three dot-separated components. The month segment is
/// zero-padded, the year is kept verbatim.
pub fn month_key(date: &str) -> Option<String> {
    let parts: Vec<&str> = date.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let mm = format!("{:0>2}", parts[1]);
    Some(format!("{}.{}", mm, parts[2]))
}

/// Signed whole-day offset of a dotted date from `today` (negative =
/// past). Date-only comparison: time of day, timezone, and DST can never
/// shift the result. None for unparseable input; callers must exclude
/// such records from past/upcoming filters and keep them only in
/// unfiltered views.
pub fn day_offset(date: &str, today: NaiveDate) -> Option<i64> {
    let parsed = NaiveDate::parse_from_str(date.trim(), "%d.%m.%Y").ok()?;
    Some((parsed - today).num_days())
}

/// [`day_offset`] against the system clock date.
pub fn days_from_today(date: &str) -> Option<i64> {
    day_offset(date, crate::utils::date::today())
}
