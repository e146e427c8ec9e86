//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use gateway_types::{
    AcquiringBank, AppError, PaymentId, PaymentOutcome, PaymentResponse, PaymentStatus,
    PaymentsRepository, ProcessPaymentRequest,
};

use crate::PaymentGatewayService;

/// Application state shared across handlers.
pub struct AppState<R: PaymentsRepository, B: AcquiringBank> {
    pub service: PaymentGatewayService<R, B>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Process a card payment.
///
/// Card data never reaches the logs; only the currency is recorded on the
/// span.
#[tracing::instrument(skip(state, req), fields(currency = %req.currency))]
pub async fn process_payment<R: PaymentsRepository, B: AcquiringBank>(
    State(state): State<Arc<AppState<R, B>>>,
    Json(req): Json<ProcessPaymentRequest>,
) -> Result<Response, ApiError> {
    let outcome = state.service.process_payment(req).await?;

    Ok(match outcome {
        PaymentOutcome::Authorized(payment) | PaymentOutcome::Declined(payment) => {
            (StatusCode::OK, Json(PaymentResponse::from(payment))).into_response()
        }
        PaymentOutcome::ValidationFailed { field, message } => {
            tracing::info!(field, %message, "payment request failed validation");
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": message,
                    "field": field,
                    "code": StatusCode::BAD_REQUEST.as_u16()
                })),
            )
                .into_response()
        }
        PaymentOutcome::Rejected { message } => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "error": message,
                "status": PaymentStatus::Rejected,
                "code": StatusCode::SERVICE_UNAVAILABLE.as_u16()
            })),
        )
            .into_response(),
    })
}

/// Get a payment by ID.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn get_payment<R: PaymentsRepository, B: AcquiringBank>(
    State(state): State<Arc<AppState<R, B>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment_id: PaymentId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid payment ID".into()))?;

    let payment = state.service.get_payment(payment_id).await?;
    Ok(Json(PaymentResponse::from(payment)))
}
