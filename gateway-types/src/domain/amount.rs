//! Currency codes and exact decimal-to-minor-unit conversion.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AmountError;

/// Currencies accepted by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Currency {
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Returns the ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    /// Exact match only - lowercase or padded codes are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            _ => Err(format!("Unknown currency: {}", s)),
        }
    }
}

/// Every supported currency carries two fractional digits; no per-currency
/// decimal-place table is consulted.
const MINOR_UNITS_PER_MAJOR: Decimal = Decimal::ONE_HUNDRED;

/// Converts a decimal amount string into integer minor units.
///
/// The text is trimmed and parsed as an exact decimal. Values must be greater
/// than zero and carry at most two fractional digits, so the multiplication
/// by 100 never needs rounding.
pub fn to_minor_units(text: &str) -> Result<i64, AmountError> {
    let amount = Decimal::from_str(text.trim()).map_err(|_| AmountError::NotANumber)?;

    if amount <= Decimal::ZERO {
        return Err(AmountError::NotPositive);
    }

    // Scale of the text as written: "10.600" is rejected even though its
    // value only has one significant fractional digit.
    if amount.scale() > 2 {
        return Err(AmountError::TooManyDecimals);
    }

    amount
        .checked_mul(MINOR_UNITS_PER_MAJOR)
        .ok_or(AmountError::Overflow)?
        .normalize()
        .to_i64()
        .ok_or(AmountError::Overflow)
}
