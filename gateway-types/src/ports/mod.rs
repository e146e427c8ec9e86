//! Port traits implemented by outbound adapters.

pub mod bank;
pub mod repository;

pub use bank::AcquiringBank;
pub use repository::PaymentsRepository;
