//! Acquiring bank port.

use crate::dto::{BankPaymentRequest, BankPaymentResponse};
use crate::error::BankError;

/// Narrow interface to the downstream acquiring bank.
///
/// A single synchronous authorization attempt per call; timeout and retry
/// policy belong to the implementation, not to this port.
#[async_trait::async_trait]
pub trait AcquiringBank: Send + Sync + 'static {
    /// Submits an authorization request and waits for the bank's answer.
    async fn authorise(
        &self,
        request: &BankPaymentRequest,
    ) -> Result<BankPaymentResponse, BankError>;
}
