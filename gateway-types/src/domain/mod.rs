//! Domain models for the payment gateway.

pub mod amount;
pub mod payment;

pub use amount::{Currency, to_minor_units};
pub use payment::{Payment, PaymentId, PaymentOutcome, PaymentStatus};
