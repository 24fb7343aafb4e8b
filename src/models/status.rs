use serde::Serialize;

/// Past/upcoming classification of an action relative to today.
/// The current day counts as upcoming, never past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionStatus {
    Past,
    Upcoming,
}

impl ActionStatus {
    pub fn from_day_offset(offset: i64) -> Self {
        if offset < 0 {
            ActionStatus::Past
        } else {
            ActionStatus::Upcoming
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::Past => "past",
            ActionStatus::Upcoming => "upcoming",
        }
    }

    /// CLI filter value → enum; "all" and unknown values mean no filter.
    pub fn from_filter(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "past" => Some(ActionStatus::Past),
            "upcoming" | "future" => Some(ActionStatus::Upcoming),
            _ => None,
        }
    }
}
