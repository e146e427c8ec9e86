//! Inbound HTTP adapter.

pub mod handlers;
pub mod rate_limit;
pub mod server;

pub use server::HttpServer;
