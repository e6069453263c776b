//! Host-tunable constants.
//!
//! Every field has a default, so a host only supplies what it wants to
//! override. Unknown keys are rejected.

use serde::{Deserialize, Serialize};

use crate::bet::DEFAULT_PRIORITY;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalcConstants {
    pub min_bet: f64,
    pub max_bet: f64,
    pub allocation_priority: Vec<String>,
    pub default_locale: String,
    pub id_length: usize,
    pub id_prefix: String,
    pub id_uppercase: bool,
    pub id_max_attempts: u32,
    pub rtp_min: f64,
    pub rtp_max: f64,
}

impl Default for CalcConstants {
    fn default() -> Self {
        Self {
            min_bet: 1.0,
            max_bet: 10_000.0,
            allocation_priority: DEFAULT_PRIORITY.iter().map(|s| s.to_string()).collect(),
            default_locale: "pt_BR".to_string(),
            id_length: 8,
            id_prefix: String::new(),
            id_uppercase: true,
            id_max_attempts: 100,
            rtp_min: 0.0,
            rtp_max: 100.0,
        }
    }
}

impl CalcConstants {
    /// Parse constants from JSON and check that the ranges make sense.
    pub fn from_json(json: &str) -> Result<Self> {
        let constants: CalcConstants = serde_json::from_str(json)?;
        constants.check()?;
        Ok(constants)
    }

    fn check(&self) -> Result<()> {
        if self.min_bet > self.max_bet {
            return Err(Error::Config(format!(
                "min_bet {} exceeds max_bet {}",
                self.min_bet, self.max_bet
            )));
        }
        if self.rtp_min > self.rtp_max {
            return Err(Error::Config(format!(
                "rtp_min {} exceeds rtp_max {}",
                self.rtp_min, self.rtp_max
            )));
        }
        if self.id_max_attempts == 0 {
            return Err(Error::Config("id_max_attempts must be at least 1".to_string()));
        }
        Ok(())
    }

    /// RTP range check using the configured bounds.
    pub fn rtp_in_range(&self, rtp: f64) -> bool {
        crate::rtp::validate_rtp_range(rtp, self.rtp_min, self.rtp_max)
    }
}
