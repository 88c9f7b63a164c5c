//! Non-negative monetary amount.

use core::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::value_object::ValueObject;

/// An amount of money that is known to be finite and `>= 0`.
///
/// Every balance-changing operation goes through this type, so the validation
/// lives in one place.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> LedgerResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(LedgerError::invalid_amount(format!(
                "amount must not be negative (got {value})"
            )));
        }
        // `-0` normalises to plain zero.
        Ok(Self(value.abs()))
    }

    /// Convert from a float, rejecting NaN, infinities and negatives.
    pub fn from_f64(value: f64) -> LedgerResult<Self> {
        if !value.is_finite() {
            return Err(LedgerError::invalid_amount(format!(
                "amount must be finite (got {value})"
            )));
        }
        let decimal = Decimal::from_f64(value).ok_or_else(|| {
            LedgerError::invalid_amount(format!("amount out of range (got {value})"))
        })?;
        Self::new(decimal)
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl ValueObject for Amount {}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl FromStr for Amount {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)
            .map_err(|e| LedgerError::invalid_amount(format!("'{trimmed}' is not a number: {e}")))?;
        Self::new(decimal)
    }
}
