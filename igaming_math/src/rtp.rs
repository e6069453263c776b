//! Return-to-player math.
//!
//! RTP values are percentages in `0..=100`; hit probabilities are
//! fractions in `(0, 1]`.

use crate::arithmetic::{clamp, round2, round_to};

/// Payout for a single hit so that the long-run return equals `rtp`%.
/// `0` when any input is non-positive.
pub fn win_from_rtp(bet: f64, rtp: f64, hit_probability: f64) -> f64 {
    if bet <= 0.0 || rtp <= 0.0 || hit_probability <= 0.0 {
        return 0.0;
    }
    round2(bet * (rtp / 100.0) / hit_probability)
}

/// Multiplier implied by `rtp` at the given hit probability, 4 decimals.
pub fn adjusted_multiplier(rtp: f64, hit_probability: f64) -> f64 {
    if rtp <= 0.0 || hit_probability <= 0.0 {
        return 0.0;
    }
    round_to((rtp / 100.0) / hit_probability, 4)
}

/// `100 - rtp`, never negative.
pub fn house_edge(rtp: f64) -> f64 {
    (100.0 - rtp).max(0.0)
}

/// Inclusive range check.
pub fn validate_rtp_range(rtp: f64, min: f64, max: f64) -> bool {
    rtp >= min && rtp <= max
}

/// Range check against the default `0..=100`.
pub fn validate_rtp(rtp: f64) -> bool {
    validate_rtp_range(rtp, 0.0, 100.0)
}

pub fn normalize_rtp(rtp: f64) -> f64 {
    clamp(rtp, 0.0, 100.0)
}

/// Observed RTP from accumulated totals.
pub fn effective_rtp(total_wins: f64, total_bets: f64) -> f64 {
    if total_bets <= 0.0 {
        return 0.0;
    }
    round2(total_wins / total_bets * 100.0)
}
