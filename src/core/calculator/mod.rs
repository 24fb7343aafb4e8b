//! Pure calculation layer: time normalization, durations, date-keyed
//! aggregation, and the payroll bonus table. Everything in here is
//! stateless and total: invalid input degrades to a sentinel value
//! (None / 0), never to a panic, because the callers render partial and
//! dirty data.

pub mod bonus;
pub mod duration;
pub mod grouping;
pub mod normalize;
