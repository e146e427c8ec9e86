//! Error types for the payment gateway.

/// A single violated request validation rule.
///
/// The validator evaluates rules in a fixed order and reports only the first
/// violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Card number must contain only digits")]
    CardNumberNotNumeric,

    #[error("Card number must be between 14 and 19 digits")]
    CardNumberLength,

    #[error("Expiry month must be between 1 and 12")]
    ExpiryMonthOutOfRange,

    #[error("Card expiry must be in the future")]
    ExpiryInPast,

    #[error("Currency must be one of USD, EUR or GBP")]
    UnsupportedCurrency,

    #[error("CVV must be 3 or 4 digits")]
    InvalidCvv,
}

impl ValidationError {
    /// The request field the violated rule applies to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::CardNumberNotNumeric | ValidationError::CardNumberLength => {
                "card_number"
            }
            ValidationError::ExpiryMonthOutOfRange => "expiry_month",
            ValidationError::ExpiryInPast => "expiry_month/expiry_year",
            ValidationError::UnsupportedCurrency => "currency",
            ValidationError::InvalidCvv => "cvv",
        }
    }
}

/// Why a request was turned away before reaching the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestRejection {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Card-number policy: the bank is never called for these requests.
    #[error("Bank payment unavailable for card number ends with 0")]
    BankUnavailable,
}

/// Malformed or out-of-range amount text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Amount must be a valid decimal number")]
    NotANumber,

    #[error("Amount must be greater than 0")]
    NotPositive,

    #[error("Amount must have at most 2 decimal places")]
    TooManyDecimals,

    #[error("Amount is too large")]
    Overflow,
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Acquiring-bank call failures.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("bank request failed: {0}")]
    Transport(String),

    #[error("bank returned HTTP status {0}")]
    Status(u16),

    #[error("bank response could not be decoded: {0}")]
    Decode(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Conflict(msg) => AppError::BadRequest(msg),
            RepoError::Database(msg) => AppError::Internal(msg),
        }
    }
}

impl From<BankError> for AppError {
    fn from(err: BankError) -> Self {
        AppError::Internal(format!("acquiring bank call failed: {err}"))
    }
}
