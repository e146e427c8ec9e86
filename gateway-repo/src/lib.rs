//! # Gateway Repo
//!
//! Concrete storage adapters for the payment gateway.
//! This crate provides the adapters that implement the `PaymentsRepository`
//! port: a concurrency-safe in-memory map for standalone use and a SQLite
//! adapter (feature `sqlite`) for on-disk persistence.

use async_trait::async_trait;
use gateway_types::{Payment, PaymentId, PaymentsRepository, RepoError};

pub mod in_memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;
#[cfg(feature = "sqlite")]
mod types;


pub use in_memory::InMemoryPayments;
#[cfg(feature = "sqlite")]
pub use sqlite::SqlitePayments;

/// Unified repository wrapper selected by configuration.
pub enum Repo {
    InMemory(InMemoryPayments),
    #[cfg(feature = "sqlite")]
    Sqlite(SqlitePayments),
}

/// Build and initialize a repository.
///
/// With a database URL (and the `sqlite` feature) this connects and runs the
/// migration; without one the gateway keeps payments in process memory.
///
/// # Examples
///
/// ```ignore
/// let repo = build_repo(Some("sqlite://payments.db?mode=rwc")).await?;
/// let repo = build_repo(None).await?; // in-memory
/// ```
pub async fn build_repo(database_url: Option<&str>) -> anyhow::Result<Repo> {
    match database_url {
        None => Ok(Repo::InMemory(InMemoryPayments::new())),
        Some(url) => {
            #[cfg(feature = "sqlite")]
            {
                return Ok(Repo::Sqlite(SqlitePayments::new(url).await?));
            }
            #[cfg(not(feature = "sqlite"))]
            {
                let _ = url;
                anyhow::bail!("DATABASE_URL is set but the `sqlite` feature is not enabled")
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Implement PaymentsRepository for Repo (delegation)
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentsRepository for Repo {
    async fn add(&self, payment: Payment) -> Result<(), RepoError> {
        match self {
            Repo::InMemory(repo) => repo.add(payment).await,
            #[cfg(feature = "sqlite")]
            Repo::Sqlite(repo) => repo.add(payment).await,
        }
    }

    async fn get(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
        match self {
            Repo::InMemory(repo) => repo.get(id).await,
            #[cfg(feature = "sqlite")]
            Repo::Sqlite(repo) => repo.get(id).await,
        }
    }
}
