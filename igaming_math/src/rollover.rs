//! Bonus wagering-requirement (rollover) tracking.

use crate::arithmetic::{clamp, round2};
use crate::domain::RolloverSummary;

/// Total that must be wagered: `deposited * multiplier`.
pub fn required(total_deposited: f64, multiplier: f64) -> f64 {
    if total_deposited < 0.0 || multiplier < 0.0 {
        return 0.0;
    }
    round2(total_deposited * multiplier)
}

pub fn remaining(required: f64, wagered: f64) -> f64 {
    round2(required - wagered).max(0.0)
}

pub fn can_withdraw(remaining: f64) -> bool {
    remaining <= 0.0
}

/// Percent of the requirement already wagered, clamped to `0..=100`.
pub fn progress(required: f64, wagered: f64) -> f64 {
    if required <= 0.0 {
        return 100.0;
    }
    clamp(round2(wagered / required * 100.0), 0.0, 100.0)
}

pub fn summarize(total_deposited: f64, multiplier: f64, wagered: f64) -> RolloverSummary {
    let required = required(total_deposited, multiplier);
    let remaining = remaining(required, wagered);
    RolloverSummary {
        required,
        remaining,
        can_withdraw: can_withdraw(remaining),
        progress: progress(required, wagered),
    }
}
