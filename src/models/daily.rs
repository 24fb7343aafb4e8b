use serde::Serialize;

/// Per-date hour totals, derived on every aggregation pass and never
/// persisted. `system_hours` sums the planned windows, `real_hours` the
/// observed ones (0 where real times are missing).
#[derive(Debug, Clone, Default, Serialize)]
pub struct DailyAggregate {
    pub date: String,
    pub system_hours: f64,
    pub real_hours: f64,
}

impl DailyAggregate {
    pub fn new(date: &str) -> Self {
        Self {
            date: date.to_string(),
            ..Default::default()
        }
    }
}
