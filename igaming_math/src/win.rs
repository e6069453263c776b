//! Win, net-win, loss and ROI arithmetic.

use crate::arithmetic::round2;

/// Gross payout. `0` for a non-positive bet or a negative multiplier.
pub fn win(bet: f64, multiplier: f64) -> f64 {
    if bet <= 0.0 || multiplier < 0.0 {
        return 0.0;
    }
    round2(bet * multiplier)
}

/// Payout minus stake.
pub fn net_win(bet: f64, multiplier: f64) -> f64 {
    round2(win(bet, multiplier) - bet)
}

/// Payout scaled by the RTP-implied factor `rtp / 100 / probability`.
pub fn win_with_rtp(bet: f64, multiplier: f64, rtp: f64, probability: f64) -> f64 {
    if bet <= 0.0 || multiplier <= 0.0 || rtp <= 0.0 || probability <= 0.0 {
        return 0.0;
    }
    round2(bet * (rtp / 100.0 / probability) * multiplier)
}

pub fn loss(bet: f64) -> f64 {
    round2(bet).max(0.0)
}

/// Return on investment in percent.
pub fn roi(bet: f64, win: f64) -> f64 {
    if bet <= 0.0 {
        return 0.0;
    }
    round2((win - bet) / bet * 100.0)
}
