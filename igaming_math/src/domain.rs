//! Core value types.
//!
//! Pure data returned by value from the calculators. Nothing here
//! outlives the call that produced it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ── Balances ──────────────────────────────────────────────────────

/// Bucket name → amount. Iteration order is the key order.
pub type BalanceMap = BTreeMap<String, f64>;

/// Build a `BalanceMap` from `(bucket, amount)` pairs.
pub fn balances<'a, I>(pairs: I) -> BalanceMap
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

// ── Validation ────────────────────────────────────────────────────

/// Outcome of a bet or balance check.
///
/// A message is present exactly when the result is invalid. The only
/// ways to build one are `valid()` and `invalid(reason)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationResult {
    valid: bool,
    message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(reason.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Convert a failed validation into `Error::Validation`.
    pub fn into_result(self) -> Result<()> {
        match self.message {
            Some(msg) if !self.valid => Err(Error::Validation(msg)),
            _ => Ok(()),
        }
    }
}

// ── Rollover ──────────────────────────────────────────────────────

/// Wagering-requirement snapshot for a bonus or deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RolloverSummary {
    pub required: f64,
    pub remaining: f64,
    pub progress: f64,     // percent, 0..=100
    pub can_withdraw: bool,
}
