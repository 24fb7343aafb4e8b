/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

use crate::models::status::ActionStatus;

/// Color used when rendering an action row, keyed on its status.
/// Unknown status (unparseable date) renders grey.
pub fn color_for_status(status: Option<ActionStatus>) -> &'static str {
    match status {
        Some(ActionStatus::Upcoming) => GREEN,
        Some(ActionStatus::Past) => GREY,
        None => YELLOW,
    }
}

/// Monthly total vs target:
/// >= target → green
/// >= 75% of target → yellow
/// below → red
pub fn color_for_target(hours: f64, target: f64) -> &'static str {
    if target <= 0.0 {
        RESET
    } else if hours >= target {
        GREEN
    } else if hours >= target * 0.75 {
        YELLOW
    } else {
        RED
    }
}

