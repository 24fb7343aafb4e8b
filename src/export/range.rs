use crate::errors::{AppError, AppResult};
use crate::utils::date::{month_bounds, parse_day, parse_month_key};
use chrono::NaiveDate;

/// Parse --range (day / month / year / interval) in the dotted forms the
/// rest of the tool speaks:
///
/// - `DD.MM.YYYY`
/// - `MM.YYYY`
/// - `YYYY`
/// - any of the above joined by `:` (same shape on both sides)
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::from(std::io::Error::other(
                "start and end must have same format",
            )));
        }

        let (s1, _) = parse_single(start)?;
        let (_, e2) = parse_single(end)?;
        Ok((s1, e2))
    } else {
        parse_single(r.trim())
    }
}

/// One period expression → inclusive (first, last) day pair.
fn parse_single(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // DD.MM.YYYY
    if let Some(d) = parse_day(p) {
        return Ok((d, d));
    }

    // MM.YYYY
    if let Some((month, year)) = parse_month_key(p) {
        return month_bounds(month, year)
            .ok_or_else(|| AppError::InvalidMonth(p.to_string()));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let d1 = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
        let d2 = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
        return Ok((d1, d2));
    }

    Err(AppError::from(std::io::Error::other(format!(
        "unsupported --range format: {p}"
    ))))
}
