//! Request validation rules.
//!
//! Pure, ordered, short-circuit checks: the first violated rule is the one
//! reported. The bank-unavailable card policy runs last, once the request is
//! structurally valid and before any monetary or bank step.

use chrono::{Datelike, Utc};

use gateway_types::domain::Currency;
use gateway_types::{ProcessPaymentRequest, RequestRejection, ValidationError};

const CARD_NUMBER_MIN_DIGITS: usize = 14;
const CARD_NUMBER_MAX_DIGITS: usize = 19;

/// Validates a payment request against the current calendar month.
pub fn validate(request: &ProcessPaymentRequest) -> Result<(), RequestRejection> {
    let now = Utc::now();
    validate_at(request, (now.year(), now.month()))
}

/// Same as [`validate`], with the current (year, month) injected.
fn validate_at(
    request: &ProcessPaymentRequest,
    current: (i32, u32),
) -> Result<(), RequestRejection> {
    if !request.card_number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::CardNumberNotNumeric.into());
    }

    let digits = request.card_number.len();
    if !(CARD_NUMBER_MIN_DIGITS..=CARD_NUMBER_MAX_DIGITS).contains(&digits) {
        return Err(ValidationError::CardNumberLength.into());
    }

    if !(1..=12).contains(&request.expiry_month) {
        return Err(ValidationError::ExpiryMonthOutOfRange.into());
    }

    if !expires_after(request.expiry_month, request.expiry_year, current) {
        return Err(ValidationError::ExpiryInPast.into());
    }

    if request.currency.parse::<Currency>().is_err() {
        return Err(ValidationError::UnsupportedCurrency.into());
    }

    if !is_cvv(&request.cvv) {
        return Err(ValidationError::InvalidCvv.into());
    }

    if request.card_number.ends_with('0') {
        return Err(RequestRejection::BankUnavailable);
    }

    Ok(())
}

/// Month-granularity comparison: a card expiring this very month is already
/// expired. The two-digit year is read as 2000+year.
fn expires_after(
    month: i32,
    two_digit_year: i32,
    (current_year, current_month): (i32, u32),
) -> bool {
    let year = 2000 + two_digit_year;
    year > current_year || (year == current_year && month as u32 > current_month)
}

fn is_cvv(text: &str) -> bool {
    (text.len() == 3 || text.len() == 4) && text.chars().all(|c| c.is_ascii_digit())
}
