//! Database row types for the SQLite adapter.

use std::str::FromStr;

use sqlx::FromRow;

use gateway_types::{Currency, Payment, PaymentId, PaymentStatus, RepoError};

/// Payment row from database.
#[derive(FromRow)]
pub struct DbPayment {
    pub id: String,
    pub status: String,
    pub card_number_last_four: i64,
    pub expiry_month: i64,
    pub expiry_year: i64,
    pub currency: String,
    pub amount: i64,
}

impl DbPayment {
    pub fn into_domain(self) -> Result<Payment, RepoError> {
        let id = PaymentId::from_str(&self.id)
            .map_err(|e| RepoError::Database(format!("invalid payment id in row: {e}")))?;

        let status = match self.status.as_str() {
            "Authorized" => PaymentStatus::Authorized,
            "Declined" => PaymentStatus::Declined,
            "Rejected" => PaymentStatus::Rejected,
            other => {
                return Err(RepoError::Database(format!(
                    "unknown payment status in row: {other}"
                )));
            }
        };

        let currency = Currency::from_str(&self.currency).map_err(RepoError::Database)?;

        Ok(Payment::from_parts(
            id,
            status,
            self.card_number_last_four as i32,
            self.expiry_month as i32,
            self.expiry_year as i32,
            currency,
            self.amount,
        ))
    }
}
