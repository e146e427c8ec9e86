//! Data Transfer Objects for the inbound API and the bank wire format.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Currency, Payment, PaymentId, PaymentStatus};

// ─────────────────────────────────────────────────────────────────────────────
// Inbound API DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to process a card payment.
///
/// No invariants are enforced at construction; the request validator owns
/// every rule.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessPaymentRequest {
    /// Card number as a digit string
    #[schema(example = "4532015112830366")]
    pub card_number: String,
    /// Expiry month, 1-12
    #[schema(example = 12)]
    pub expiry_month: i32,
    /// Two-digit expiry year, read as 2000+year
    #[schema(example = 27)]
    pub expiry_year: i32,
    /// Three-letter currency code
    #[schema(example = "GBP")]
    pub currency: String,
    /// Decimal amount in major units
    #[schema(example = "10.60")]
    pub amount: String,
    /// Card verification value, 3 or 4 digits
    #[schema(example = "123")]
    pub cvv: String,
}

/// A payment record as exposed to callers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    /// Unique payment identifier
    pub id: PaymentId,
    pub status: PaymentStatus,
    /// Last four card digits as an integer
    #[schema(example = 3938)]
    pub card_number_last_four: i32,
    pub expiry_month: i32,
    /// Two-digit year as originally supplied
    pub expiry_year: i32,
    pub currency: Currency,
    /// Amount in minor units
    #[schema(example = 1060)]
    pub amount: i64,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            status: payment.status,
            card_number_last_four: payment.card_number_last_four,
            expiry_month: payment.expiry_month,
            expiry_year: payment.expiry_year,
            currency: payment.currency,
            amount: payment.amount,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Acquiring bank wire format
// ─────────────────────────────────────────────────────────────────────────────

/// Authorization request submitted to the acquiring bank.
///
/// Built once per processing attempt and discarded after the bank call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankPaymentRequest {
    pub card_number: String,
    /// Expiry formatted as `MM/YYYY`
    pub expiry_date: String,
    pub currency: Currency,
    /// Amount in minor units
    pub amount: i64,
    pub cvv: String,
}

/// The bank's answer to an authorization request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankPaymentResponse {
    pub authorized: bool,
    /// Meaningful only when `authorized` is true
    #[serde(default)]
    pub authorization_code: String,
}
