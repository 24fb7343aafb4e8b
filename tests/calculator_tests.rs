//! Direct library tests of the calculation layer.

use chrono::NaiveDate;
use promolog::core::calculator::duration::{hours_between, hours_between_opt};
use promolog::core::calculator::grouping::{
    compare_dates, day_offset, days_from_today, group_by_date, month_key,
};
use promolog::core::calculator::normalize::normalize_time;
use promolog::models::action::Action;
use promolog::models::status::ActionStatus;
use promolog::utils::date::{format_day, today};
use std::cmp::Ordering;

fn action(date: &str, start: &str, end: &str) -> Action {
    Action::new(
        0,
        "PLH00001".to_string(),
        date.to_string(),
        "Galaxy Store".to_string(),
        "Main St 5".to_string(),
        start.to_string(),
        end.to_string(),
    )
}

// ---------------------------------------------------------------
// normalize_time
// ---------------------------------------------------------------

#[test]
fn normalize_pads_missing_segments() {
    assert_eq!(normalize_time(Some("9")), Some("09:00:00".to_string()));
    assert_eq!(normalize_time(Some("09:30")), Some("09:30:00".to_string()));
    assert_eq!(
        normalize_time(Some("9:5:7")),
        Some("09:05:07".to_string())
    );
    // trailing separator behaves like a missing segment
    assert_eq!(normalize_time(Some("12:")), Some("12:00:00".to_string()));
}

#[test]
fn normalize_is_idempotent() {
    let once = normalize_time(Some("7:45")).unwrap();
    assert_eq!(normalize_time(Some(&once)), Some(once.clone()));
}

#[test]
fn normalize_rejects_out_of_range_and_garbage() {
    assert_eq!(normalize_time(Some("24:00")), None);
    assert_eq!(normalize_time(Some("12:60")), None);
    assert_eq!(normalize_time(Some("12:00:60")), None);
    assert_eq!(normalize_time(Some("ab")), None);
    assert_eq!(normalize_time(Some("12:xx")), None);
}

#[test]
fn normalize_empty_input_is_none_not_error() {
    assert_eq!(normalize_time(None), None);
    assert_eq!(normalize_time(Some("")), None);
    assert_eq!(normalize_time(Some("   ")), None);
}

// ---------------------------------------------------------------
// hours_between
// ---------------------------------------------------------------

#[test]
fn equal_times_give_zero() {
    assert_eq!(hours_between("09:00:00", "09:00:00"), 0.0);
}

#[test]
fn plain_working_day() {
    assert_eq!(hours_between("09:00:00", "17:30:00"), 8.5);
}

#[test]
fn midnight_wraparound_is_next_day() {
    assert_eq!(hours_between("22:00:00", "02:00:00"), 4.0);
}

#[test]
fn malformed_times_sum_as_zero() {
    assert_eq!(hours_between("junk", "17:00:00"), 0.0);
    assert_eq!(hours_between("09:00:00", "25:00:00"), 0.0);
    assert_eq!(hours_between_opt(None, Some("17:00:00")), 0.0);
}

// ---------------------------------------------------------------
// group_by_date
// ---------------------------------------------------------------

#[test]
fn groups_are_chronological_not_lexical() {
    let actions = vec![
        action("02.07.2025", "09:00:00", "17:00:00"),
        action("01.07.2025", "10:00:00", "14:00:00"),
    ];

    let days = group_by_date(&actions);
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, "01.07.2025");
    assert_eq!(days[1].date, "02.07.2025");
}

#[test]
fn same_day_hours_are_summed() {
    let mut late = action("01.07.2025", "18:00:00", "22:00:00");
    late.real_start = Some("18:10:00".to_string());
    late.real_end = Some("22:10:00".to_string());

    let actions = vec![action("01.07.2025", "09:00:00", "17:00:00"), late];

    let days = group_by_date(&actions);
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].system_hours, 12.0);
    // only one action carries real times
    assert_eq!(days[0].real_hours, 4.0);
}

#[test]
fn missing_real_times_contribute_zero() {
    let days = group_by_date(&[action("01.07.2025", "09:00:00", "17:00:00")]);
    assert_eq!(days[0].real_hours, 0.0);
}

#[test]
fn unparseable_dates_sort_last() {
    let actions = vec![
        action("not-a-date", "09:00:00", "10:00:00"),
        action("05.07.2025", "09:00:00", "10:00:00"),
    ];

    let days = group_by_date(&actions);
    assert_eq!(days[0].date, "05.07.2025");
    assert_eq!(days[1].date, "not-a-date");
}

#[test]
fn date_comparator_beats_lexical_order() {
    // lexically "02.01.2026" < "03.12.2025": chronological order disagrees
    assert_eq!(compare_dates("02.01.2026", "03.12.2025"), Ordering::Greater);
    assert_eq!(compare_dates("31.01.2025", "01.02.2025"), Ordering::Less);
}

// ---------------------------------------------------------------
// month_key / day_offset
// ---------------------------------------------------------------

#[test]
fn month_key_extracts_and_pads() {
    assert_eq!(month_key("05.09.2025"), Some("09.2025".to_string()));
    assert_eq!(month_key("5.9.2025"), Some("09.2025".to_string()));
}

#[test]
fn month_key_unknown_sentinel() {
    assert_eq!(month_key("bad"), None);
    assert_eq!(month_key("09.2025"), None);
    assert_eq!(month_key("01.02.03.04"), None);
}

#[test]
fn day_offset_is_date_only() {
    let base = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
    assert_eq!(day_offset("14.07.2025", base), Some(-1));
    assert_eq!(day_offset("15.07.2025", base), Some(0));
    assert_eq!(day_offset("16.07.2025", base), Some(1));
    assert_eq!(day_offset("01.07.2024", base), Some(-379));
    assert_eq!(day_offset("garbage", base), None);
}

#[test]
fn today_counts_as_upcoming() {
    let offset = days_from_today(&format_day(today()));
    assert_eq!(offset, Some(0));
    assert_eq!(
        ActionStatus::from_day_offset(offset.unwrap()),
        ActionStatus::Upcoming
    );
}

#[test]
fn yesterday_counts_as_past() {
    let yesterday = today() - chrono::Duration::days(1);
    let offset = days_from_today(&format_day(yesterday)).unwrap();
    assert_eq!(ActionStatus::from_day_offset(offset), ActionStatus::Past);
}
