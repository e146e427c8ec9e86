//! Payment Gateway Application Service
//!
//! Sequences validation, amount conversion, the bank call, outcome derivation
//! and persistence through injected ports. Contains NO infrastructure logic.

use uuid::Uuid;

use gateway_types::domain::payment::{bank_expiry_date, last_four_digits};
use gateway_types::domain::{Currency, to_minor_units};
use gateway_types::{
    AcquiringBank, AppError, BankPaymentRequest, Payment, PaymentId, PaymentOutcome,
    PaymentStatus, PaymentsRepository, ProcessPaymentRequest, RequestRejection, ValidationError,
};

use crate::validator;

/// Application service for payment processing.
///
/// Generic over the storage and bank ports - adapters are injected at compile
/// time, which keeps the pipeline testable with deterministic doubles.
pub struct PaymentGatewayService<R: PaymentsRepository, B: AcquiringBank> {
    repo: R,
    bank: B,
}

impl<R: PaymentsRepository, B: AcquiringBank> PaymentGatewayService<R, B> {
    /// Creates a new gateway service over the given adapters.
    pub fn new(repo: R, bank: B) -> Self {
        Self { repo, bank }
    }

    /// Runs a payment request through the full pipeline.
    ///
    /// Business outcomes (authorized, declined, rejected, validation failure)
    /// come back as [`PaymentOutcome`] variants; the error path is reserved
    /// for server-side failures such as an unusable bank response.
    pub async fn process_payment(
        &self,
        request: ProcessPaymentRequest,
    ) -> Result<PaymentOutcome, AppError> {
        if let Err(rejection) = validator::validate(&request) {
            return Ok(match rejection {
                RequestRejection::Invalid(rule) => PaymentOutcome::ValidationFailed {
                    field: rule.field(),
                    message: rule.to_string(),
                },
                RequestRejection::BankUnavailable => PaymentOutcome::Rejected {
                    message: rejection.to_string(),
                },
            });
        }

        let amount = match to_minor_units(&request.amount) {
            Ok(minor) => minor,
            Err(err) => {
                return Ok(PaymentOutcome::ValidationFailed {
                    field: "amount",
                    message: err.to_string(),
                });
            }
        };

        let Ok(currency) = request.currency.parse::<Currency>() else {
            return Ok(PaymentOutcome::ValidationFailed {
                field: "currency",
                message: ValidationError::UnsupportedCurrency.to_string(),
            });
        };

        let bank_request = BankPaymentRequest {
            card_number: request.card_number.clone(),
            expiry_date: bank_expiry_date(request.expiry_month, request.expiry_year),
            currency,
            amount,
            cvv: request.cvv.clone(),
        };

        tracing::debug!(%currency, amount, "calling acquiring bank");
        let response = self.bank.authorise(&bank_request).await?;

        let (id, status) = if response.authorized {
            let id = Uuid::parse_str(&response.authorization_code).map_err(|_| {
                AppError::Internal(
                    "bank returned an authorization code that is not a UUID".into(),
                )
            })?;
            (PaymentId::from_uuid(id), PaymentStatus::Authorized)
        } else {
            (PaymentId::new(), PaymentStatus::Declined)
        };

        let last_four = last_four_digits(&request.card_number)
            .ok_or_else(|| AppError::Internal("card number tail is not maskable".into()))?;

        let payment = Payment {
            id,
            status,
            card_number_last_four: last_four,
            expiry_month: request.expiry_month,
            expiry_year: request.expiry_year,
            currency,
            amount,
        };

        self.repo.add(payment.clone()).await?;

        Ok(if response.authorized {
            PaymentOutcome::Authorized(payment)
        } else {
            PaymentOutcome::Declined(payment)
        })
    }

    /// Gets a stored payment by ID.
    pub async fn get_payment(&self, id: PaymentId) -> Result<Payment, AppError> {
        self.repo
            .get(id)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| AppError::NotFound(format!("Payment {}", id))))
    }
}
