//! Payment store port.
//!
//! The primary outbound port in our hexagonal architecture.
//! Adapters (in-memory, SQLite) implement this trait.

use crate::domain::{Payment, PaymentId};
use crate::error::RepoError;

/// Keyed persistence for finalized payment records.
///
/// Implementations must be safe under concurrent use from multiple requests
/// and must guarantee that a write for an identifier is visible to subsequent
/// reads of that identifier.
#[async_trait::async_trait]
pub trait PaymentsRepository: Send + Sync + 'static {
    /// Stores a finalized payment keyed by its identifier.
    async fn add(&self, payment: Payment) -> Result<(), RepoError>;

    /// Looks up a payment by identifier.
    async fn get(&self, id: PaymentId) -> Result<Option<Payment>, RepoError>;
}
