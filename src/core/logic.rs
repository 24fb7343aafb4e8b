use crate::core::calculator::grouping;
use crate::models::action::Action;
use crate::models::daily::DailyAggregate;

pub struct Core;

impl Core {
    /// Daily aggregates for a set of actions, chronologically sorted.
    pub fn daily_aggregates(actions: &[Action]) -> Vec<DailyAggregate> {
        grouping::group_by_date(actions)
    }

    /// Grand totals over a set of daily aggregates: (system, real).
    pub fn total_hours(days: &[DailyAggregate]) -> (f64, f64) {
        days.iter().fold((0.0, 0.0), |(sys, real), d| {
            (sys + d.system_hours, real + d.real_hours)
        })
    }
}
