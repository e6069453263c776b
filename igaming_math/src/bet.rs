//! Bet validation and multi-bucket balance allocation.
//!
//! Rejections are returned as `ValidationResult::invalid`, never as
//! errors: an out-of-range bet is an ordinary outcome.

use tracing::{debug, trace};

use crate::arithmetic::round2;
use crate::config::CalcConstants;
use crate::domain::{BalanceMap, ValidationResult};

/// Buckets drained first, in this order. Remaining buckets follow in
/// map order.
pub const DEFAULT_PRIORITY: [&str; 4] = ["main", "bonus", "ref", "affiliate"];

/// Range check. The order of the checks decides which message wins:
/// a bet that is both below `min` and non-positive reports the minimum.
pub fn validate_amount(bet: f64, min: f64, max: f64) -> ValidationResult {
    if bet < min {
        return ValidationResult::invalid(format!("Minimum bet is {:.2}", min));
    }
    if bet > max {
        return ValidationResult::invalid(format!("Maximum bet is {:.2}", max));
    }
    // NaN fails every comparison above; treat it like a zero stake.
    if bet <= 0.0 || !bet.is_finite() {
        return ValidationResult::invalid("Bet must be greater than zero");
    }
    ValidationResult::valid()
}

pub fn validate_balance(bet: f64, balances: &BalanceMap) -> ValidationResult {
    let total = round2(balances.values().sum());
    if round2(bet) > total {
        return ValidationResult::invalid(format!(
            "Insufficient balance. Available: {:.2}",
            total
        ));
    }
    ValidationResult::valid()
}

/// Greedy allocation over `DEFAULT_PRIORITY`, then the other buckets.
pub fn allocate_balance(bet: f64, balances: &BalanceMap) -> BalanceMap {
    allocate_balance_with_priority(bet, balances, &DEFAULT_PRIORITY)
}

/// Greedy allocation with a caller-supplied priority list.
///
/// Buckets named in `priority` are drained first in that order, then
/// every other bucket in map order, until the bet is covered. Buckets
/// that contribute nothing are left out of the result.
pub fn allocate_balance_with_priority<S: AsRef<str>>(
    bet: f64,
    balances: &BalanceMap,
    priority: &[S],
) -> BalanceMap {
    let mut allocation = BalanceMap::new();
    let mut remaining = round2(bet);

    let prioritized = priority.iter().map(|p| p.as_ref());
    let rest = balances
        .keys()
        .map(|k| k.as_str())
        .filter(|k| !priority.iter().any(|p| p.as_ref() == *k));

    for bucket in prioritized.chain(rest) {
        if remaining <= 0.0 {
            break;
        }
        let available = match balances.get(bucket) {
            Some(&amount) if amount > 0.0 => amount,
            _ => continue,
        };
        if allocation.contains_key(bucket) {
            continue;
        }
        let take = round2(available.min(remaining));
        if take <= 0.0 {
            continue;
        }
        trace!(bucket, take, "allocating from bucket");
        allocation.insert(bucket.to_string(), take);
        remaining = round2(remaining - take);
    }

    if remaining > 0.0 {
        debug!(bet, uncovered = remaining, "balances exhausted before covering bet");
    }
    allocation
}

/// Amount check first; the balance is only looked at for an in-range bet.
pub fn validate(bet: f64, min: f64, max: f64, balances: &BalanceMap) -> ValidationResult {
    let amount = validate_amount(bet, min, max);
    if !amount.is_valid() {
        return amount;
    }
    validate_balance(bet, balances)
}

// ── Configured validator ───────────────────────────────────────────

/// Bet limits and allocation priority bundled from `CalcConstants`.
#[derive(Debug, Clone, PartialEq)]
pub struct BetValidator {
    pub min_bet: f64,
    pub max_bet: f64,
    pub priority: Vec<String>,
}

impl BetValidator {
    pub fn from_constants(constants: &CalcConstants) -> Self {
        Self {
            min_bet: constants.min_bet,
            max_bet: constants.max_bet,
            priority: constants.allocation_priority.clone(),
        }
    }

    pub fn validate(&self, bet: f64, balances: &BalanceMap) -> ValidationResult {
        validate(bet, self.min_bet, self.max_bet, balances)
    }

    pub fn allocate(&self, bet: f64, balances: &BalanceMap) -> BalanceMap {
        allocate_balance_with_priority(bet, balances, &self.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::balances;

    #[test]
    fn test_validate_amount_in_range() {
        assert!(validate_amount(50.0, 10.0, 1000.0).is_valid());
    }

    #[test]
    fn test_validate_amount_messages() {
        let low = validate_amount(5.0, 10.0, 1000.0);
        assert!(!low.is_valid());
        assert_eq!(low.message(), Some("Minimum bet is 10.00"));

        let high = validate_amount(1500.0, 10.0, 1000.0);
        assert_eq!(high.message(), Some("Maximum bet is 1000.00"));

        let zero = validate_amount(0.0, 0.0, 1000.0);
        assert_eq!(zero.message(), Some("Bet must be greater than zero"));
    }

    #[test]
    fn test_minimum_message_wins_over_zero() {
        let r = validate_amount(-5.0, 1.0, 100.0);
        assert_eq!(r.message(), Some("Minimum bet is 1.00"));
    }

    #[test]
    fn test_validate_balance() {
        let b = balances([("main", 100.0), ("bonus", 50.0)]);
        assert!(validate_balance(150.0, &b).is_valid());
        let r = validate_balance(150.01, &b);
        assert_eq!(r.message(), Some("Insufficient balance. Available: 150.00"));
    }

    #[test]
    fn test_validate_balance_ignores_summation_drift() {
        let b = balances([("main", 0.7), ("bonus", 0.1)]);
        assert!(validate_balance(0.8, &b).is_valid());
        assert_eq!(allocate_balance(0.8, &b), b);
        let r = validate_balance(0.81, &b);
        assert_eq!(r.message(), Some("Insufficient balance. Available: 0.80"));
    }

    #[test]
    fn test_nan_bet_rejected() {
        let r = validate_amount(f64::NAN, 1.0, 100.0);
        assert_eq!(r.message(), Some("Bet must be greater than zero"));
        let r = validate(f64::NAN, 1.0, 100.0, &balances([("main", 50.0)]));
        assert!(!r.is_valid());
    }

    #[test]
    fn test_allocate_main_then_bonus() {
        let b = balances([("main", 100.0), ("bonus", 50.0)]);
        assert_eq!(
            allocate_balance(120.0, &b),
            balances([("main", 100.0), ("bonus", 20.0)])
        );
    }

    #[test]
    fn test_allocate_skips_missing_main() {
        let b = balances([("bonus", 50.0)]);
        assert_eq!(allocate_balance(30.0, &b), balances([("bonus", 30.0)]));
    }

    #[test]
    fn test_allocate_zero_bucket_omitted() {
        let b = balances([("main", 0.0), ("bonus", 10.0), ("ref", 10.0)]);
        assert_eq!(
            allocate_balance(15.0, &b),
            balances([("bonus", 10.0), ("ref", 5.0)])
        );
    }

    #[test]
    fn test_allocate_unlisted_buckets_after_priority() {
        let b = balances([("zeta", 10.0), ("cashback", 10.0), ("affiliate", 5.0)]);
        assert_eq!(
            allocate_balance(18.0, &b),
            balances([("affiliate", 5.0), ("cashback", 10.0), ("zeta", 3.0)])
        );
    }

    #[test]
    fn test_allocate_insufficient_uses_everything() {
        let b = balances([("main", 10.0), ("bonus", 5.0)]);
        assert_eq!(allocate_balance(100.0, &b), b);
    }

    #[test]
    fn test_allocate_custom_priority() {
        let b = balances([("main", 100.0), ("bonus", 50.0)]);
        assert_eq!(
            allocate_balance_with_priority(60.0, &b, &["bonus", "main"]),
            balances([("bonus", 50.0), ("main", 10.0)])
        );
    }

    #[test]
    fn test_validate_short_circuits_on_amount() {
        let empty = BalanceMap::new();
        let r = validate(5.0, 10.0, 100.0, &empty);
        assert_eq!(r.message(), Some("Minimum bet is 10.00"));
        let r = validate(50.0, 10.0, 100.0, &empty);
        assert_eq!(r.message(), Some("Insufficient balance. Available: 0.00"));
    }

    #[test]
    fn test_configured_validator() {
        let constants = CalcConstants {
            min_bet: 2.0,
            max_bet: 200.0,
            allocation_priority: vec!["bonus".into(), "main".into()],
            ..CalcConstants::default()
        };
        let v = BetValidator::from_constants(&constants);
        let b = balances([("main", 100.0), ("bonus", 50.0)]);
        assert!(v.validate(120.0, &b).is_valid());
        assert!(!v.validate(1.0, &b).is_valid());
        assert_eq!(v.allocate(70.0, &b), balances([("bonus", 50.0), ("main", 20.0)]));
    }
}
