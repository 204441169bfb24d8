//! Monetary amounts in integer cents.
//!
//! The backend serves hourly rates as decimal strings in detail payloads and
//! as bare JSON numbers in calendar events. Both forms parse into the same
//! cent count so every estimate downstream is computed on integers.

use super::ParseMoneyError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monetary amount held as integer cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates an amount from integer cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the amount in integer cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns whether the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Parses a decimal amount such as `50`, `50.5`, or `-50.00`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseMoneyError`] when the value is not a decimal number
    /// with at most two fraction digits, or when it overflows the cent range.
    pub fn parse(text: &str) -> Result<Self, ParseMoneyError> {
        let trimmed = text.trim();
        let invalid = || ParseMoneyError(text.to_owned());

        let (negative, unsigned) = trimmed
            .strip_prefix('-')
            .map_or((false, trimmed), |rest| (true, rest));

        let mut parts = unsigned.splitn(2, '.');
        let whole_digits = parts.next().unwrap_or_default();
        let fraction_digits = parts.next().unwrap_or_default();
        if whole_digits.is_empty() && fraction_digits.is_empty() {
            return Err(invalid());
        }

        let whole: i64 = if whole_digits.is_empty() {
            0
        } else {
            whole_digits.parse().map_err(|_| invalid())?
        };

        if fraction_digits.len() > 2 || !fraction_digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let mut fraction: i64 = if fraction_digits.is_empty() {
            0
        } else {
            fraction_digits.parse().map_err(|_| invalid())?
        };
        if fraction_digits.len() == 1 {
            fraction *= 10;
        }

        let cents = whole
            .checked_mul(100)
            .and_then(|dollars| dollars.checked_add(fraction))
            .ok_or_else(invalid)?;
        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Parses a JSON number through its decimal rendering.
    ///
    /// # Errors
    ///
    /// Returns [`ParseMoneyError`] when the number renders with more than two
    /// fraction digits.
    pub fn from_json_number(number: &serde_json::Number) -> Result<Self, ParseMoneyError> {
        Self::parse(&number.to_string())
    }

    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "cent formatting splits on a constant power of ten"
    )]
    const fn split_cents(self) -> (u64, u64) {
        let magnitude = self.0.unsigned_abs();
        (magnitude / 100, magnitude % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dollars, cents) = self.split_cents();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}${dollars}.{cents:02}")
    }
}
