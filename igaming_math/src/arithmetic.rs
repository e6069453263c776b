//! Arithmetic primitives shared by every calculator.
//!
//! All monetary and percentage results pass through `round_to`, which
//! rounds half away from zero in decimal space. Financial comparisons
//! depend on every module rounding the same way.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to `decimals` places, half away from zero.
///
/// The value is converted through its shortest round-trip decimal
/// rendering, so `1.005` rounds to `1.01` rather than to the binary
/// neighbour `1.00`. Values outside the decimal range (or non-finite)
/// fall back to scaled `f64::round`, which has the same midpoint rule.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    match Decimal::from_str(&value.to_string()) {
        Ok(d) => {
            let rounded = d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            rounded
                .to_string()
                .parse::<f64>()
                .unwrap_or_else(|_| scaled_round(value, decimals))
        }
        Err(_) => scaled_round(value, decimals),
    }
}

fn scaled_round(value: f64, decimals: u32) -> f64 {
    // Beyond 2^52 every f64 is already an integer.
    if value.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Round to two decimal places (money).
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Clamp `value` into `[min, max]`. NaN stays NaN; bounds must satisfy
/// `min <= max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(1.005, 2), 1.01);
        assert_eq!(round_to(-1.005, 2), -1.01);
        assert_eq!(round_to(26.666666, 2), 26.67);
    }

    #[test]
    fn test_round_keeps_exact_values() {
        assert_eq!(round2(1234.56), 1234.56);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round_to(3.84, 4), 3.84);
    }

    #[test]
    fn test_round_out_of_decimal_range() {
        assert_eq!(round2(1e300), 1e300);
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-1.0, 0.0, 100.0), 0.0);
        assert_eq!(clamp(150.0, 0.0, 100.0), 100.0);
        assert_eq!(clamp(42.0, 0.0, 100.0), 42.0);
        assert!(clamp(f64::NAN, 0.0, 100.0).is_nan());
    }
}
