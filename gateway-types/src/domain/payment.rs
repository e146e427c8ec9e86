//! Payment record domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::amount::Currency;

/// Unique identifier for a Payment.
///
/// For authorized payments this is the bank's authorization code; for
/// declined payments it is generated locally and carries no meaning to the
/// bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PaymentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns the UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Final state of a processed payment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PaymentStatus {
    Authorized,
    Declined,
    Rejected,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Authorized => write!(f, "Authorized"),
            PaymentStatus::Declined => write!(f, "Declined"),
            PaymentStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// A finalized payment record.
///
/// Records are immutable once created - one exists if and only if a request
/// passed validation and received an answer from the acquiring bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Outcome of the bank call
    pub status: PaymentStatus,
    /// Last four card digits as an integer (leading zeros collapse)
    pub card_number_last_four: i32,
    /// Expiry month as supplied
    pub expiry_month: i32,
    /// Two-digit expiry year exactly as supplied, never normalized
    pub expiry_year: i32,
    pub currency: Currency,
    /// Amount in minor units
    pub amount: i64,
}

impl Payment {
    /// Reconstructs a payment from storage fields.
    pub fn from_parts(
        id: PaymentId,
        status: PaymentStatus,
        card_number_last_four: i32,
        expiry_month: i32,
        expiry_year: i32,
        currency: Currency,
        amount: i64,
    ) -> Self {
        Self {
            id,
            status,
            card_number_last_four,
            expiry_month,
            expiry_year,
            currency,
            amount,
        }
    }
}

/// Outcome of a single processing attempt.
///
/// Business outcomes are variants rather than errors so callers branch
/// explicitly; only server-side failures travel the error path.
#[derive(Debug, Clone)]
pub enum PaymentOutcome {
    /// The bank authorized the payment; the record is stored.
    Authorized(Payment),
    /// The bank declined the payment; the record is stored anyway.
    Declined(Payment),
    /// Card-number policy made the request unprocessable; nothing stored.
    Rejected { message: String },
    /// A request field violated a validation rule; nothing stored.
    ValidationFailed {
        field: &'static str,
        message: String,
    },
}

/// Last four digits of a card number, parsed as an integer.
///
/// Leading zeros in the tail collapse ("0091" becomes 91), matching the
/// masking format the rest of the system stores and compares.
pub fn last_four_digits(card_number: &str) -> Option<i32> {
    let tail = card_number.get(card_number.len().saturating_sub(4)..)?;
    tail.parse().ok()
}

/// Expiry in the `MM/YYYY` wire format the acquiring bank expects.
pub fn bank_expiry_date(month: i32, two_digit_year: i32) -> String {
    format!("{:02}/{}", month, 2000 + two_digit_year)
}
