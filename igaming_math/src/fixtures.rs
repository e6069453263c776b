//! JSON fixture evaluation.
//!
//! A fixture names an operation, its positional arguments and the
//! expected result:
//!
//! ```json
//! {"op": "rollover.summarize", "args": [1000, 3, 800],
//!  "expected": {"required": 3000, "remaining": 2200, "progress": 26.67, "can_withdraw": false}}
//! ```
//!
//! Only deterministic operations are exposed. Weighted draws go through
//! `weighted.generate_with_seed`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::{BalanceMap, ValidationResult};
use crate::error::{Error, Result};
use crate::{bet, brazil, money, rollover, rtp, weighted, win};

/// Tolerance for comparing numeric results.
const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    pub op: String,
    #[serde(default)]
    pub args: Vec<Value>,
    pub expected: Value,
}

impl Fixture {
    /// Evaluate and compare against `expected`.
    pub fn check(&self) -> Result<bool> {
        let actual = evaluate(self)?;
        Ok(values_match(&actual, &self.expected))
    }
}

/// Parse a JSON array of fixtures.
pub fn load_fixtures(json: &str) -> Result<Vec<Fixture>> {
    serde_json::from_str(json).map_err(|e| Error::Fixture(e.to_string()))
}

/// Run the fixture's operation and return its result as JSON.
pub fn evaluate(fixture: &Fixture) -> Result<Value> {
    let a = &fixture.args;
    let value = match fixture.op.as_str() {
        "rtp.win_from_rtp" => json!(rtp::win_from_rtp(num(a, 0)?, num(a, 1)?, num(a, 2)?)),
        "rtp.adjusted_multiplier" => json!(rtp::adjusted_multiplier(num(a, 0)?, num(a, 1)?)),
        "rtp.house_edge" => json!(rtp::house_edge(num(a, 0)?)),
        "rtp.validate_rtp_range" => {
            json!(rtp::validate_rtp_range(num(a, 0)?, num_or(a, 1, 0.0)?, num_or(a, 2, 100.0)?))
        }
        "rtp.normalize_rtp" => json!(rtp::normalize_rtp(num(a, 0)?)),
        "rtp.effective_rtp" => json!(rtp::effective_rtp(num(a, 0)?, num(a, 1)?)),

        "rollover.required" => json!(rollover::required(num(a, 0)?, num(a, 1)?)),
        "rollover.remaining" => json!(rollover::remaining(num(a, 0)?, num(a, 1)?)),
        "rollover.can_withdraw" => json!(rollover::can_withdraw(num(a, 0)?)),
        "rollover.progress" => json!(rollover::progress(num(a, 0)?, num(a, 1)?)),
        "rollover.summarize" => {
            serde_json::to_value(rollover::summarize(num(a, 0)?, num(a, 1)?, num(a, 2)?))
                .map_err(|e| Error::Fixture(e.to_string()))?
        }

        "bet.validate_amount" => {
            validation_json(bet::validate_amount(num(a, 0)?, num(a, 1)?, num(a, 2)?))
        }
        "bet.validate_balance" => validation_json(bet::validate_balance(num(a, 0)?, &balance_map(a, 1)?)),
        "bet.allocate_balance" => json!(bet::allocate_balance(num(a, 0)?, &balance_map(a, 1)?)),
        "bet.validate" => validation_json(bet::validate(
            num(a, 0)?,
            num(a, 1)?,
            num(a, 2)?,
            &balance_map(a, 3)?,
        )),

        "win.win" => json!(win::win(num(a, 0)?, num(a, 1)?)),
        "win.net_win" => json!(win::net_win(num(a, 0)?, num(a, 1)?)),
        "win.win_with_rtp" => {
            json!(win::win_with_rtp(num(a, 0)?, num(a, 1)?, num(a, 2)?, num(a, 3)?))
        }
        "win.loss" => json!(win::loss(num(a, 0)?)),
        "win.roi" => json!(win::roi(num(a, 0)?, num(a, 1)?)),

        "weighted.probabilities" => json!(weighted::probabilities(&weights(a, 0)?)),
        "weighted.generate_with_seed" => match weighted::generate_with_seed(&weights(a, 0)?, uint(a, 1)?) {
            Ok(index) => json!(index),
            Err(e) if e.is_invalid_input() => json!({ "error": "invalid_input" }),
            Err(e) => return Err(e),
        },

        "money.format" => json!(money::format(
            num(a, 0)?,
            opt_uint(a, 1)?,
            text_or(a, 2, "pt_BR")?
        )),
        "money.format_number" => json!(money::format_number(
            num(a, 0)?,
            opt_uint(a, 1)?.unwrap_or(2),
            text_or(a, 2, ".")?,
            text_or(a, 3, ",")?
        )),
        "money.format_compact" => {
            json!(money::format_compact(num(a, 0)?, opt_uint(a, 1)?.unwrap_or(1)))
        }
        "money.format_international" => json!(money::format_international(
            num(a, 0)?,
            opt_uint(a, 1)?.unwrap_or(2),
            text_or(a, 2, "$")?
        )),

        "brazil.validate_cpf" => json!(brazil::validate_cpf(text(a, 0)?)),
        "brazil.validate_cnpj" => json!(brazil::validate_cnpj(text(a, 0)?)),
        "brazil.validate_document" => json!(brazil::validate_document(text(a, 0)?)),
        "brazil.format_cpf" => json!(brazil::format_cpf(text(a, 0)?)),
        "brazil.format_cnpj" => json!(brazil::format_cnpj(text(a, 0)?)),

        other => return Err(Error::Fixture(format!("unknown operation {:?}", other))),
    };
    Ok(value)
}

/// Structural equality with numeric tolerance: `3000` matches `3000.0`.
pub fn values_match(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => (x - y).abs() <= EPSILON,
            _ => false,
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_match(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).map_or(false, |y| values_match(x, y)))
        }
        _ => actual == expected,
    }
}

// ── Argument access (private) ──────────────────────────────────────

fn arg(args: &[Value], i: usize) -> Result<&Value> {
    args.get(i)
        .ok_or_else(|| Error::Fixture(format!("missing argument {}", i)))
}

fn num(args: &[Value], i: usize) -> Result<f64> {
    arg(args, i)?
        .as_f64()
        .ok_or_else(|| Error::Fixture(format!("argument {} is not a number", i)))
}

fn num_or(args: &[Value], i: usize, default: f64) -> Result<f64> {
    match args.get(i) {
        None | Some(Value::Null) => Ok(default),
        Some(_) => num(args, i),
    }
}

fn uint(args: &[Value], i: usize) -> Result<u64> {
    arg(args, i)?
        .as_u64()
        .ok_or_else(|| Error::Fixture(format!("argument {} is not an unsigned integer", i)))
}

fn opt_uint(args: &[Value], i: usize) -> Result<Option<u32>> {
    match args.get(i) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => {
            let v = uint(args, i)?;
            u32::try_from(v)
                .map(Some)
                .map_err(|_| Error::Fixture(format!("argument {} out of range", i)))
        }
    }
}

fn text(args: &[Value], i: usize) -> Result<&str> {
    arg(args, i)?
        .as_str()
        .ok_or_else(|| Error::Fixture(format!("argument {} is not a string", i)))
}

fn text_or<'a>(args: &'a [Value], i: usize, default: &'a str) -> Result<&'a str> {
    match args.get(i) {
        None | Some(Value::Null) => Ok(default),
        Some(_) => text(args, i),
    }
}

fn weights(args: &[Value], i: usize) -> Result<Vec<f64>> {
    serde_json::from_value(arg(args, i)?.clone())
        .map_err(|e| Error::Fixture(format!("argument {} is not a weight list: {}", i, e)))
}

fn balance_map(args: &[Value], i: usize) -> Result<BalanceMap> {
    serde_json::from_value(arg(args, i)?.clone())
        .map_err(|e| Error::Fixture(format!("argument {} is not a balance map: {}", i, e)))
}

fn validation_json(result: ValidationResult) -> Value {
    json!({ "valid": result.is_valid(), "message": result.message() })
}
