//! # Gateway Types
//!
//! Domain types and port traits for the card payment gateway.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Currency, Payment) and the amount codec
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Validation, adapter and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Currency, Payment, PaymentId, PaymentOutcome, PaymentStatus};
pub use dto::*;
pub use error::{
    AmountError, AppError, BankError, RepoError, RequestRejection, ValidationError,
};
pub use ports::{AcquiringBank, PaymentsRepository};
