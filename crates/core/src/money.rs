//! Money value object (single currency, USD).

use core::fmt;
use core::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Symbol prefixed to every rendered amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Floats below a tenth of a cent round to zero without a decimal round-trip.
const SUB_CENT_FLOOR: f64 = 0.001;

/// Non-negative monetary amount, stored in minor units (cents).
///
/// Negative amounts cannot be represented; every fallible constructor rejects them
/// with [`DomainError::InvalidInput`].
///
/// Conversions from decimal input round **half-up** at the cent boundary, applied
/// to the exact decimal digits of the input: `1.005` becomes 101 cents, `1.0049`
/// becomes 100.
///
/// Display renders the storefront convention: `$`, thousands grouped with `,`,
/// exactly two fractional digits (`$1,234.50`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build from signed minor units, rejecting negative amounts.
    pub fn from_minor(cents: i64) -> DomainResult<Self> {
        u64::try_from(cents)
            .map(Self)
            .map_err(|_| DomainError::invalid_input(format!("amount must be non-negative, got {cents} cents")))
    }

    /// Build from a major-unit float (`125.5` dollars).
    ///
    /// Rounding uses the shortest decimal representation of the float, so `1.005`
    /// rounds the way it reads rather than the way it is stored in binary.
    pub fn from_major(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::invalid_input(format!("amount must be finite, got {amount}")));
        }
        if amount < 0.0 {
            return Err(DomainError::invalid_input(format!("amount must be non-negative, got {amount}")));
        }
        if amount < SUB_CENT_FLOOR {
            // Rounds to zero; also covers -0.0, whose text form carries a sign.
            return Ok(Self::ZERO);
        }
        amount.to_string().parse()
    }

    /// Round a non-negative decimal amount half-up to whole cents.
    fn from_decimal(amount: Decimal) -> DomainResult<Self> {
        amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_u64())
            .map(Self)
            .ok_or_else(|| DomainError::invalid_input(format!("amount {amount} is too large")))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parse a plain decimal amount (`"148"`, `"125.50"`, `"$1.005"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed);

        if digits.starts_with('-') {
            return Err(DomainError::invalid_input(format!("amount must be non-negative, got {s:?}")));
        }

        // Plain digits with at most one point; no signs, exponents or separators.
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        let well_formed = !(whole.is_empty() && frac.is_empty())
            && whole.bytes().all(|b| b.is_ascii_digit())
            && frac.bytes().all(|b| b.is_ascii_digit());
        if !well_formed {
            return Err(DomainError::invalid_input(format!("malformed amount {s:?}")));
        }

        let normalized = format!(
            "{}.{}",
            if whole.is_empty() { "0" } else { whole },
            if frac.is_empty() { "0" } else { frac }
        );
        let amount = Decimal::from_str(&normalized)
            .map_err(|e| DomainError::invalid_input(format!("amount {s:?} is out of range: {e}")))?;

        Self::from_decimal(amount)
    }
}

impl TryFrom<f64> for Money {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_major(value)
    }
}

impl From<Money> for f64 {
    fn from(value: Money) -> Self {
        value.0 as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = group_thousands(self.0 / 100);
        let cents = self.0 % 100;
        write!(f, "{CURRENCY_SYMBOL}{dollars}.{cents:02}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
