//! # Monetary Amounts — Exact Decimal Money
//!
//! Defines `Amount`, a non-negative monetary value stored as exact minor
//! units (cents). Amounts are parsed from decimal strings and serialized
//! back to decimal strings.
//!
//! ## Invariant
//!
//! Financial amounts are never represented as floating-point numbers.
//! Settlement splits must satisfy `claimant_share + respondent_share ==
//! total` exactly; integer minor units make that arithmetic exact.
//!
//! An `Amount` is always non-negative. Positivity (`> 0`) is a *case*
//! invariant enforced at intake submission, not a type invariant: shares
//! of a split may legitimately be zero.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A non-negative monetary amount in minor units (cents).
///
/// Parsed from decimal strings with at most two fraction digits
/// (`"4000"`, `"4000.50"`, `"0.01"`). Serializes as the decimal string
/// form, matching the external representation of money throughout the
/// stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(i64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Parse an amount from a decimal string.
    ///
    /// Accepts an optional fractional part of at most two digits. Rejects
    /// empty input, signs, non-digit characters, more than one decimal
    /// point, and more than two fraction digits.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidAmount`] naming the rejected input and
    /// the reason.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let trimmed = s.trim();
        let reject = |reason: &str| CoreError::InvalidAmount {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(reject("empty amount"));
        }
        if trimmed.starts_with('-') || trimmed.starts_with('+') {
            return Err(reject("signed amounts are not accepted"));
        }

        let (whole, frac) = match trimmed.split_once('.') {
            Some((w, f)) => (w, f),
            None => (trimmed, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(reject("no digits"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(reject("non-digit character"));
        }
        if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(reject("fractional part must be at most two digits"));
        }

        let whole_units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| reject("amount too large"))?
        };
        let frac_units: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| reject("non-digit character"))? * 10,
            _ => frac.parse().map_err(|_| reject("non-digit character"))?,
        };

        let minor = whole_units
            .checked_mul(100)
            .and_then(|w| w.checked_add(frac_units))
            .ok_or_else(|| reject("amount too large"))?;

        Ok(Self(minor))
    }

    /// Construct from minor units (cents).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidAmount`] for negative values.
    pub fn from_minor_units(units: i64) -> Result<Self, CoreError> {
        if units < 0 {
            return Err(CoreError::InvalidAmount {
                value: units.to_string(),
                reason: "amount cannot be negative".to_string(),
            });
        }
        Ok(Self(units))
    }

    /// The amount in minor units (cents).
    pub fn minor_units(&self) -> i64 {
        self.0
    }

    /// Whether the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whether the amount is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Subtract, returning `None` if the result would be negative.
    pub fn checked_sub(&self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).filter(|u| *u >= 0).map(Amount)
    }

    /// Subtract, floored at zero.
    pub fn saturating_sub(&self, other: Amount) -> Amount {
        Amount((self.0 - other.0).max(0))
    }

    /// The floor of `percent`% of this amount, exact in minor units.
    ///
    /// Percentages above 100 are clamped. The result never exceeds the
    /// amount itself, so `a.saturating_sub(a.percent_of(p))` is the exact
    /// remainder and the two always sum back to `a`.
    pub fn percent_of(&self, percent: u8) -> Amount {
        let p = i128::from(percent.min(100));
        Amount(((i128::from(self.0) * p) / 100) as i64)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl From<Amount> for String {
    fn from(a: Amount) -> Self {
        a.to_string()
    }
}

impl TryFrom<String> for Amount {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Amount::parse(&s)
    }
}

impl std::str::FromStr for Amount {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse(s)
    }
}
