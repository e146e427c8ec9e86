//! In-memory repository adapter.
//!
//! Payments live in a concurrency-safe keyed map. Per-key writes are atomic
//! and immediately visible to readers.

use async_trait::async_trait;
use dashmap::DashMap;

use gateway_types::{Payment, PaymentId, PaymentsRepository, RepoError};

/// In-memory payment store backed by a concurrent map.
#[derive(Default)]
pub struct InMemoryPayments {
    payments: DashMap<PaymentId, Payment>,
}

impl InMemoryPayments {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored payments.
    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

#[async_trait]
impl PaymentsRepository for InMemoryPayments {
    async fn add(&self, payment: Payment) -> Result<(), RepoError> {
        // Last write wins, matching keyed-map put semantics.
        self.payments.insert(payment.id, payment);
        Ok(())
    }

    async fn get(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
        Ok(self.payments.get(&id).map(|entry| entry.value().clone()))
    }
}
