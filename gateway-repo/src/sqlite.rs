//! SQLite repository adapter.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use gateway_types::{Payment, PaymentId, PaymentsRepository, RepoError};

use crate::types::DbPayment;

/// SQLite repository implementation.
pub struct SqlitePayments {
    pool: SqlitePool,
}

impl SqlitePayments {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        // Run migration from migration file
        let ddl = include_str!("../migrations/0001_create_payments.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl PaymentsRepository for SqlitePayments {
    async fn add(&self, payment: Payment) -> Result<(), RepoError> {
        sqlx::query(
            r#"INSERT INTO payments (id, status, card_number_last_four, expiry_month, expiry_year, currency, amount)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(id) DO UPDATE SET
                   status = excluded.status,
                   card_number_last_four = excluded.card_number_last_four,
                   expiry_month = excluded.expiry_month,
                   expiry_year = excluded.expiry_year,
                   currency = excluded.currency,
                   amount = excluded.amount"#,
        )
        .bind(payment.id.to_string())
        .bind(payment.status.to_string())
        .bind(payment.card_number_last_four)
        .bind(payment.expiry_month)
        .bind(payment.expiry_year)
        .bind(payment.currency.to_string())
        .bind(payment.amount)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        tracing::debug!(payment_id = %payment.id, "payment stored");
        Ok(())
    }

    async fn get(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
        let row: Option<DbPayment> = sqlx::query_as(
            r#"SELECT id, status, card_number_last_four, expiry_month, expiry_year, currency, amount
               FROM payments WHERE id = ?"#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbPayment::into_domain).transpose()
    }
}
