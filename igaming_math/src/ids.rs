//! Identifier generation.
//!
//! Identifiers are random, not guaranteed unique: two alphanumeric ids
//! of length `n` collide with probability `1 / 62^n`. Hosts that need
//! uniqueness supply an existence check to
//! `generate_unique_id_with_check`.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, RngCore};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::config::CalcConstants;
use crate::error::{Error, Result};
use crate::random::{entropy_rng, seeded_rng, DefaultRng};

pub const ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Longest numeric id whose upper bound fits in a `u64`.
pub const MAX_NUMERIC_LENGTH: u32 = 19;

/// Identifier generator owning its random source and defaults.
pub struct IdGenerator<R: RngCore = DefaultRng> {
    rng: R,
    length: usize,
    prefix: String,
    uppercase: bool,
    max_attempts: u32,
}

impl IdGenerator<DefaultRng> {
    pub fn new() -> Self {
        Self::from_rng(entropy_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(seeded_rng(seed))
    }

    /// Entropy-seeded generator using the id defaults from `constants`.
    pub fn from_constants(constants: &CalcConstants) -> Self {
        let mut generator = Self::new();
        generator.length = constants.id_length;
        generator.prefix = constants.id_prefix.clone();
        generator.uppercase = constants.id_uppercase;
        generator.max_attempts = constants.id_max_attempts;
        generator
    }
}

impl Default for IdGenerator<DefaultRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> IdGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            length: 8,
            prefix: String::new(),
            uppercase: true,
            max_attempts: 100,
        }
    }

    /// `length` characters drawn uniformly from `ALPHABET`, optionally
    /// uppercased, after `prefix`.
    pub fn generate_unique_id(&mut self, length: usize, prefix: &str, uppercase: bool) -> String {
        let body: String = (0..length)
            .map(|_| ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        let body = if uppercase { body.to_uppercase() } else { body };
        format!("{}{}", prefix, body)
    }

    /// `generate_unique_id` with the configured length, prefix and case.
    pub fn generate_default(&mut self) -> String {
        let prefix = self.prefix.clone();
        self.generate_unique_id(self.length, &prefix, self.uppercase)
    }

    /// Uppercase hex of a SHA-256 over the current time and a random
    /// salt, cut to `length`. Digests are chained for lengths over 64.
    pub fn generate_from_hash(&mut self, length: usize, prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let salt = self.rng.next_u64();

        let mut hasher = Sha256::new();
        hasher.update(nanos.to_le_bytes());
        hasher.update(salt.to_le_bytes());
        let mut digest = hasher.finalize();

        let mut hex = String::with_capacity(length.max(64));
        loop {
            hex.extend(digest.iter().map(|b| format!("{:02X}", b)));
            if hex.len() >= length {
                break;
            }
            digest = Sha256::digest(digest);
        }
        hex.truncate(length);
        format!("{}{}", prefix, hex)
    }

    /// Exactly `length` digits, no leading zero.
    pub fn generate_numeric_id(&mut self, length: u32, prefix: &str) -> Result<String> {
        if length == 0 || length > MAX_NUMERIC_LENGTH {
            return Err(Error::InvalidInput(format!(
                "numeric id length must be between 1 and {}, got {}",
                MAX_NUMERIC_LENGTH, length
            )));
        }
        let low = 10u64.pow(length - 1);
        let high = 10u64
            .checked_pow(length)
            .map(|v| v - 1)
            .unwrap_or(u64::MAX);
        let value = self.rng.gen_range(low..=high);
        Ok(format!("{}{}", prefix, value))
    }

    /// Draw ids until `exists` reports one as unused.
    pub fn generate_unique_id_with_check<F>(
        &mut self,
        mut exists: F,
        length: usize,
        max_attempts: u32,
    ) -> Result<String>
    where
        F: FnMut(&str) -> bool,
    {
        let prefix = self.prefix.clone();
        for attempt in 1..=max_attempts {
            let candidate = self.generate_unique_id(length, &prefix, self.uppercase);
            if !exists(&candidate) {
                return Ok(candidate);
            }
            debug!(attempt, candidate = %candidate, "identifier already taken");
        }
        warn!(max_attempts, length, "no unused identifier found");
        Err(Error::ExhaustedAttempts {
            attempts: max_attempts,
        })
    }

    /// `generate_unique_id_with_check` with the configured length and budget.
    pub fn generate_checked<F>(&mut self, exists: F) -> Result<String>
    where
        F: FnMut(&str) -> bool,
    {
        self.generate_unique_id_with_check(exists, self.length, self.max_attempts)
    }
}
