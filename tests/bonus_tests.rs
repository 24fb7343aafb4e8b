//! The payroll bonus table, band by band.
//!
//! All cases use 80 worked hours (= 20 actions) unless stated, so the
//! efficiency values come out exact.

use promolog::core::calculator::bonus::compute_bonus;

#[test]
fn zero_hours_guard_no_division() {
    let out = compute_bonus(40, 80, 0.0);
    assert_eq!(out.efficiency_a, 0.0);
    assert_eq!(out.efficiency_b, 0.0);
    assert_eq!(out.bonus_amount, 0);
}

#[test]
fn efficiency_below_all_bands_pays_nothing() {
    // 160h = 40 actions, efficiency_b = 0 → "otherwise" band
    let out = compute_bonus(40, 0, 160.0);
    assert_eq!(out.efficiency_a, 1.0);
    assert_eq!(out.efficiency_b, 0.0);
    assert_eq!(out.bonus_amount, 0);
}

#[test]
fn flat_band_ignores_a_side_performance() {
    // efficiency_b = 3.5 pays 15x regardless of the A columns
    let weak = compute_bonus(10, 70, 80.0);
    assert_eq!(weak.bonus_amount, 15 * 10);

    let strong = compute_bonus(40, 70, 80.0); // effA 2.0, count >= 34
    assert_eq!(strong.bonus_amount, 15 * 40);
}

#[test]
fn second_band_lower_edge_is_inclusive() {
    // efficiency_b exactly 4.0 with strong A side and high count → 39x
    let out = compute_bonus(40, 80, 80.0);
    assert_eq!(out.efficiency_a, 2.0);
    assert_eq!(out.efficiency_b, 4.0);
    assert_eq!(out.bonus_amount, 39 * 40);
}

#[test]
fn second_band_sub_tiers() {
    // strong A, low count: 40h = 10 actions, effA 2.0, effB 4.0
    assert_eq!(compute_bonus(20, 40, 40.0).bonus_amount, 35 * 20);
    // weak A (1.75), high count
    assert_eq!(compute_bonus(35, 80, 80.0).bonus_amount, 30 * 35);
    // weak A, low count
    assert_eq!(compute_bonus(20, 80, 80.0).bonus_amount, 25 * 20);
}

#[test]
fn third_band_sub_tiers() {
    // efficiency_b = 5.5
    assert_eq!(compute_bonus(40, 110, 80.0).bonus_amount, 50 * 40);
    assert_eq!(compute_bonus(20, 55, 40.0).bonus_amount, 44 * 20);
    assert_eq!(compute_bonus(35, 110, 80.0).bonus_amount, 38 * 35);
    assert_eq!(compute_bonus(20, 110, 80.0).bonus_amount, 31 * 20);
}

#[test]
fn top_band_sub_tiers() {
    // efficiency_b = 7.5
    assert_eq!(compute_bonus(40, 150, 80.0).bonus_amount, 55 * 40);
    assert_eq!(compute_bonus(20, 75, 40.0).bonus_amount, 49 * 20);
    assert_eq!(compute_bonus(35, 150, 80.0).bonus_amount, 42 * 35);
    assert_eq!(compute_bonus(20, 150, 80.0).bonus_amount, 35 * 20);
}

#[test]
fn remaining_tier_edges_fall_in_the_gap() {
    // exact edges other than 4.0 pay nothing
    assert_eq!(compute_bonus(40, 60, 80.0).bonus_amount, 0); // effB 3.0
    assert_eq!(compute_bonus(40, 78, 80.0).bonus_amount, 0); // effB 3.9
    assert_eq!(compute_bonus(40, 106, 80.0).bonus_amount, 0); // effB 5.3
    assert_eq!(compute_bonus(40, 108, 80.0).bonus_amount, 0); // effB 5.4
    assert_eq!(compute_bonus(40, 146, 80.0).bonus_amount, 0); // effB 7.3
    assert_eq!(compute_bonus(40, 148, 80.0).bonus_amount, 0); // effB 7.4
}

#[test]
fn open_gaps_between_bands_pay_nothing() {
    // effB = 3.95 and 5.35 sit between bands
    assert_eq!(compute_bonus(40, 79, 80.0).bonus_amount, 0);
    assert_eq!(compute_bonus(40, 107, 80.0).bonus_amount, 0);
}

#[test]
fn fractional_action_count() {
    // 10h = 2.5 actions; device_b 10 → effB 4.0, device_a 5 → effA 2.0, count < 34
    let out = compute_bonus(5, 10, 10.0);
    assert_eq!(out.efficiency_a, 2.0);
    assert_eq!(out.efficiency_b, 4.0);
    assert_eq!(out.bonus_amount, 35 * 5);
}
