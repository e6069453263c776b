#![forbid(unsafe_code)]

//! Stateless calculation and validation utilities for iGaming platforms.
//!
//! Every component is an independent set of pure functions over
//! primitive inputs. Components that need randomness own an explicit
//! random source instead of sharing a global one.

pub mod arithmetic;
pub mod error;
pub mod domain;
pub mod config;
pub mod random;
pub mod rtp;
pub mod rollover;
pub mod bet;
pub mod win;
pub mod weighted;
pub mod money;
pub mod ids;
pub mod brazil;
pub mod fixtures;

pub use config::CalcConstants;
pub use domain::{BalanceMap, RolloverSummary, ValidationResult};
pub use error::{Error, Result};
pub use ids::IdGenerator;
pub use weighted::WeightedRandom;
