//! Locale-keyed currency rendering.
//!
//! Each locale tag maps to a `LocaleRule`. Unknown tags fall back to the
//! international rule, which takes its symbol from the caller.

use serde::{Deserialize, Serialize};

use crate::arithmetic::round_to;
use crate::config::CalcConstants;

/// Separators, symbol and default precision for one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleRule {
    pub symbol: String,
    pub thousands_sep: String,
    pub decimal_sep: String,
    pub default_decimals: u32,
    /// Space between symbol and digits (`R$ 10,00` vs `$10.00`).
    pub symbol_spaced: bool,
}

impl LocaleRule {
    fn new(symbol: &str, thousands: &str, decimal: &str, decimals: u32, spaced: bool) -> Self {
        Self {
            symbol: symbol.to_string(),
            thousands_sep: thousands.to_string(),
            decimal_sep: decimal.to_string(),
            default_decimals: decimals,
            symbol_spaced: spaced,
        }
    }

    pub fn brazilian() -> Self {
        Self::new("R$", ".", ",", 2, true)
    }

    pub fn dollar() -> Self {
        Self::new("$", ",", ".", 2, false)
    }

    pub fn pound() -> Self {
        Self::new("£", ",", ".", 2, false)
    }

    pub fn euro() -> Self {
        Self::new("€", ".", ",", 2, true)
    }

    pub fn rupee() -> Self {
        Self::new("₹", ",", ".", 2, false)
    }

    pub fn yuan() -> Self {
        Self::new("¥", ",", ".", 2, false)
    }

    pub fn won() -> Self {
        Self::new("₩", ",", ".", 0, false)
    }

    /// Dollar-style grouping with an arbitrary symbol.
    pub fn international(symbol: &str) -> Self {
        Self::new(symbol, ",", ".", 2, false)
    }

    /// Render `amount` with this rule. `None` uses `default_decimals`.
    pub fn render(&self, amount: f64, decimals: Option<u32>) -> String {
        let decimals = decimals.unwrap_or(self.default_decimals);
        let number = group_number(amount.abs(), decimals, &self.thousands_sep, &self.decimal_sep);
        let sign = if is_negative(amount, decimals) { "-" } else { "" };
        let gap = if self.symbol_spaced { " " } else { "" };
        format!("{}{}{}{}", sign, self.symbol, gap, number)
    }
}

/// Rule for a locale tag, or `None` when the tag is not known.
pub fn locale_rule(locale: &str) -> Option<LocaleRule> {
    let rule = match locale {
        "pt_BR" | "brl" => LocaleRule::brazilian(),
        "en_US" | "usd" => LocaleRule::dollar(),
        "en_GB" | "gbp" => LocaleRule::pound(),
        "de_DE" | "fr_FR" | "es_ES" | "it_IT" | "pt_PT" | "nl_NL" | "eur" => LocaleRule::euro(),
        "hi_IN" | "en_IN" | "inr" => LocaleRule::rupee(),
        "zh_CN" | "cny" => LocaleRule::yuan(),
        "ko_KR" | "krw" => LocaleRule::won(),
        _ => return None,
    };
    Some(rule)
}

/// Format `amount` for `locale`; unknown locales use the international
/// rule with a `$` symbol.
pub fn format(amount: f64, decimals: Option<u32>, locale: &str) -> String {
    locale_rule(locale)
        .unwrap_or_else(|| LocaleRule::international("$"))
        .render(amount, decimals)
}

/// Format with the locale configured in `constants.default_locale`.
pub fn format_default(amount: f64, constants: &CalcConstants) -> String {
    format(amount, None, &constants.default_locale)
}

pub fn format_brazilian(amount: f64) -> String {
    LocaleRule::brazilian().render(amount, None)
}

pub fn format_dollar(amount: f64) -> String {
    LocaleRule::dollar().render(amount, None)
}

pub fn format_pound(amount: f64) -> String {
    LocaleRule::pound().render(amount, None)
}

pub fn format_euro(amount: f64) -> String {
    LocaleRule::euro().render(amount, None)
}

pub fn format_rupee(amount: f64) -> String {
    LocaleRule::rupee().render(amount, None)
}

pub fn format_yuan(amount: f64) -> String {
    LocaleRule::yuan().render(amount, None)
}

pub fn format_won(amount: f64) -> String {
    LocaleRule::won().render(amount, None)
}

pub fn format_international(amount: f64, decimals: u32, symbol: &str) -> String {
    LocaleRule::international(symbol).render(amount, Some(decimals))
}

/// Grouped number without a currency symbol.
pub fn format_number(amount: f64, decimals: u32, thousands_sep: &str, decimal_sep: &str) -> String {
    let number = group_number(amount.abs(), decimals, thousands_sep, decimal_sep);
    if is_negative(amount, decimals) {
        format!("-{}", number)
    } else {
        number
    }
}

/// Short form: `1,5M`, `2,3K`, Brazilian separators, no symbol.
pub fn format_compact(amount: f64, decimals: u32) -> String {
    let magnitude = amount.abs();
    let (scaled, suffix) = if magnitude >= 1_000_000.0 {
        (magnitude / 1_000_000.0, "M")
    } else if magnitude >= 1_000.0 {
        (magnitude / 1_000.0, "K")
    } else {
        (magnitude, "")
    };
    let number = group_number(scaled, decimals, ".", ",");
    let sign = if amount < 0.0 && round_to(scaled, decimals) != 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, number, suffix)
}

// ── Digit grouping (private) ───────────────────────────────────────

/// A negative amount that does not round to zero at `decimals`.
fn is_negative(amount: f64, decimals: u32) -> bool {
    amount < 0.0 && round_to(amount, decimals) != 0.0
}

fn group_number(abs_amount: f64, decimals: u32, thousands_sep: &str, decimal_sep: &str) -> String {
    let rounded = round_to(abs_amount, decimals);
    let fixed = format!("{:.*}", decimals as usize, rounded);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(fixed.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(thousands_sep);
        }
        grouped.push(*ch);
    }

    match frac_part {
        Some(f) => format!("{}{}{}", grouped, decimal_sep, f),
        None => grouped,
    }
}
