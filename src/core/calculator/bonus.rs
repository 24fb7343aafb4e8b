//! Payroll bonus-tier evaluation.
//!
//! The multiplier table is the one the payroll office actually applies,
//! quirks included: the lowest band pays a flat 15x no matter how the
//! A-side performed, and values landing exactly on most tier edges pay
//! nothing. Do not "fix" either behavior here without sign-off from the
//! business owner.

use crate::models::payroll::BonusOutcome;

/// Every action is modeled as a fixed 4-hour unit.
const HOURS_PER_ACTION: f64 = 4.0;

fn multiplier(efficiency_a: f64, efficiency_b: f64, device_count_a: u32) -> u32 {
    let strong_a = efficiency_a >= 1.8;
    let high_count = device_count_a >= 34;

    if efficiency_b > 3.0 && efficiency_b < 3.9 {
        // flat band: ignores the A-side sub-conditions entirely
        15
    } else if efficiency_b >= 4.0 && efficiency_b < 5.3 {
        match (strong_a, high_count) {
            (true, true) => 39,
            (true, false) => 35,
            (false, true) => 30,
            (false, false) => 25,
        }
    } else if efficiency_b > 5.4 && efficiency_b < 7.3 {
        match (strong_a, high_count) {
            (true, true) => 50,
            (true, false) => 44,
            (false, true) => 38,
            (false, false) => 31,
        }
    } else if efficiency_b > 7.4 {
        match (strong_a, high_count) {
            (true, true) => 55,
            (true, false) => 49,
            (false, true) => 42,
            (false, false) => 35,
        }
    } else {
        0
    }
}

/// Evaluate the bonus for two device-sale counters over a total of worked
/// hours. Zero hours means zero actions: both efficiencies are defined as
/// 0 by explicit guard, never a division by zero.
pub fn compute_bonus(device_count_a: u32, device_count_b: u32, total_hours: f64) -> BonusOutcome {
    let action_count = total_hours / HOURS_PER_ACTION;

    let (efficiency_a, efficiency_b) = if action_count == 0.0 {
        (0.0, 0.0)
    } else {
        (
            f64::from(device_count_a) / action_count,
            f64::from(device_count_b) / action_count,
        )
    };

    let bonus_amount = multiplier(efficiency_a, efficiency_b, device_count_a) * device_count_a;

    BonusOutcome {
        efficiency_a,
        efficiency_b,
        bonus_amount,
    }
}
