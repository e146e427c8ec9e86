//! # Acquiring Bank Client
//!
//! Outbound HTTP adapter implementing the `AcquiringBank` port.
//!
//! A single `POST {base_url}/payments` per authorization attempt - one
//! blocking round trip, no retries. Transport timeout policy lives in the
//! underlying reqwest client.

use async_trait::async_trait;
use reqwest::Client;

use gateway_types::{AcquiringBank, BankError, BankPaymentRequest, BankPaymentResponse};

/// HTTP client for the acquiring bank's authorization endpoint.
pub struct BankClient {
    base_url: String,
    http: Client,
}

impl BankClient {
    /// Creates a new client for the given bank base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl AcquiringBank for BankClient {
    async fn authorise(
        &self,
        request: &BankPaymentRequest,
    ) -> Result<BankPaymentResponse, BankError> {
        let response = self
            .http
            .post(format!("{}/payments", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| BankError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BankError::Status(status.as_u16()));
        }

        response
            .json::<BankPaymentResponse>()
            .await
            .map_err(|e| BankError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = BankClient::new("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = BankClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
