//! Calendar helpers for the dotted `DD.MM.YYYY` date form used across the
//! action records.

use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `DD.MM.YYYY` string into a NaiveDate.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%d.%m.%Y").ok()
}

/// Render a NaiveDate back into the dotted `DD.MM.YYYY` form.
pub fn format_day(d: NaiveDate) -> String {
    d.format("%d.%m.%Y").to_string()
}

/// Month key (`MM.YYYY`) of the current system date.
pub fn current_month_key() -> String {
    let t = today();
    format!("{:02}.{}", t.month(), t.year())
}

/// Validate a `MM.YYYY` month key, returning `(month, year)`.
pub fn parse_month_key(s: &str) -> Option<(u32, i32)> {
    let (m, y) = s.trim().split_once('.')?;
    let month: u32 = m.parse().ok()?;
    let year: i32 = y.parse().ok()?;
    if (1..=12).contains(&month) && y.len() == 4 {
        Some((month, year))
    } else {
        None
    }
}

/// First and last day of a `MM.YYYY` month.
pub fn month_bounds(month: u32, year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next.pred_opt()?))
}

/// English month name for a `MM` segment, used in report titles.
pub fn month_name(mm: &str) -> &'static str {
    match mm {
        "01" => "January",
        "02" => "February",
        "03" => "March",
        "04" => "April",
        "05" => "May",
        "06" => "June",
        "07" => "July",
        "08" => "August",
        "09" => "September",
        "10" => "October",
        "11" => "November",
        "12" => "December",
        _ => "Unknown",
    }
}
