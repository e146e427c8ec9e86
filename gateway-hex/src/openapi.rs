//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use gateway_types::dto::{PaymentResponse, ProcessPaymentRequest};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Process a card payment
#[utoipa::path(
    post,
    path = "/payment",
    tag = "payments",
    request_body = ProcessPaymentRequest,
    responses(
        (status = 200, description = "Payment authorized or declined by the bank", body = PaymentResponse),
        (status = 400, description = "A request field failed validation"),
        (status = 503, description = "Bank payment unavailable for this card number"),
        (status = 500, description = "Bank processing failure")
    )
)]
async fn process_payment() {}

/// Retrieve a payment by ID
#[utoipa::path(
    get,
    path = "/payment/{id}",
    tag = "payments",
    params(
        ("id" = String, Path, description = "Payment ID (UUID)")
    ),
    responses(
        (status = 200, description = "Payment found", body = PaymentResponse),
        (status = 400, description = "Invalid payment ID"),
        (status = 404, description = "Payment not found")
    )
)]
async fn get_payment() {}

/// OpenAPI document for the Payment Gateway API.
#[derive(OpenApi)]
#[openapi(
    paths(health, process_payment, get_payment),
    components(schemas(ProcessPaymentRequest, PaymentResponse)),
    tags(
        (name = "payments", description = "Card payment processing and retrieval"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
