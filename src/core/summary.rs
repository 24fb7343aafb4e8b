//! Monthly per-login hour totals across the roster.

use crate::core::calculator::duration::{hours_between, hours_between_opt};
use crate::core::calculator::grouping::month_key;
use crate::models::action::Action;
use crate::models::monthly::MonthlySummary;
use crate::models::payroll::HoursMode;

/// Hours contributed by a single action under the selected mode.
/// Real mode counts only actions where both real times are present.
pub fn action_hours(action: &Action, mode: HoursMode) -> f64 {
    match mode {
        HoursMode::System => hours_between(&action.system_start, &action.system_end),
        HoursMode::Real => {
            hours_between_opt(action.real_start.as_deref(), action.real_end.as_deref())
        }
    }
}

/// Total hours of one login's actions within a `MM.YYYY` month.
pub fn monthly_hours(actions: &[Action], month: &str, mode: HoursMode) -> f64 {
    actions
        .iter()
        .filter(|a| month_key(&a.date).as_deref() == Some(month))
        .map(|a| action_hours(a, mode))
        .sum()
}

/// Per-login totals for a month, one row per roster login. Logins with no
/// actions in the month still appear with 0 hours so the supervisor sees
/// the whole team. Rows keep the roster order.
pub fn monthly_summary(
    roster: &[String],
    actions: &[Action],
    month: &str,
    mode: HoursMode,
) -> Vec<MonthlySummary> {
    roster
        .iter()
        .map(|login| MonthlySummary {
            login: login.clone(),
            hours: actions
                .iter()
                .filter(|a| &a.login == login)
                .filter(|a| month_key(&a.date).as_deref() == Some(month))
                .map(|a| action_hours(a, mode))
                .sum(),
        })
        .collect()
}

/// Distinct month keys present in an action list, chronologically sorted.
/// Used to pick the default month filter and to render month choices.
pub fn available_months(actions: &[Action]) -> Vec<String> {
    let mut months: Vec<String> = actions.iter().filter_map(|a| month_key(&a.date)).collect();
    months.sort_by(|a, b| {
        // "MM.YYYY" → compare (YYYY, MM)
        let key = |s: &String| -> (String, String) {
            match s.split_once('.') {
                Some((m, y)) => (y.to_string(), m.to_string()),
                None => (String::new(), s.clone()),
            }
        };
        key(a).cmp(&key(b))
    });
    months.dedup();
    months
}
