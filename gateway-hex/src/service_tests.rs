//! PaymentGatewayService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{Datelike, Utc};

    use gateway_types::{
        AcquiringBank, AppError, BankError, BankPaymentRequest, BankPaymentResponse, Payment,
        PaymentId, PaymentOutcome, PaymentStatus, PaymentsRepository, ProcessPaymentRequest,
        RepoError,
    };

    use crate::PaymentGatewayService;

    const AUTH_CODE: &str = "6b03b0d9-8053-4da7-87ed-0d27490f23e6";

    /// Simple shared in-memory repository for testing the service layer.
    #[derive(Clone, Default)]
    pub struct MockRepo {
        payments: Arc<Mutex<HashMap<PaymentId, Payment>>>,
    }

    impl MockRepo {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn stored(&self) -> usize {
            self.payments.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PaymentsRepository for MockRepo {
        async fn add(&self, payment: Payment) -> Result<(), RepoError> {
            self.payments.lock().unwrap().insert(payment.id, payment);
            Ok(())
        }

        async fn get(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
            Ok(self.payments.lock().unwrap().get(&id).cloned())
        }
    }

    enum Behaviour {
        Respond { authorized: bool, code: &'static str },
        Fail,
    }

    /// Deterministic bank double that records how it was called.
    pub struct MockBank {
        behaviour: Behaviour,
        calls: Arc<AtomicUsize>,
        last_request: Arc<Mutex<Option<BankPaymentRequest>>>,
    }

    impl MockBank {
        fn with_behaviour(behaviour: Behaviour) -> Self {
            Self {
                behaviour,
                calls: Arc::new(AtomicUsize::new(0)),
                last_request: Arc::new(Mutex::new(None)),
            }
        }

        pub fn authorizing(code: &'static str) -> Self {
            Self::with_behaviour(Behaviour::Respond {
                authorized: true,
                code,
            })
        }

        pub fn declining() -> Self {
            Self::with_behaviour(Behaviour::Respond {
                authorized: false,
                code: "",
            })
        }

        pub fn failing() -> Self {
            Self::with_behaviour(Behaviour::Fail)
        }

        pub fn call_counter(&self) -> Arc<AtomicUsize> {
            self.calls.clone()
        }

        pub fn request_capture(&self) -> Arc<Mutex<Option<BankPaymentRequest>>> {
            self.last_request.clone()
        }
    }

    #[async_trait]
    impl AcquiringBank for MockBank {
        async fn authorise(
            &self,
            request: &BankPaymentRequest,
        ) -> Result<BankPaymentResponse, BankError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());

            match &self.behaviour {
                Behaviour::Respond { authorized, code } => Ok(BankPaymentResponse {
                    authorized: *authorized,
                    authorization_code: (*code).to_string(),
                }),
                Behaviour::Fail => Err(BankError::Transport("connection refused".into())),
            }
        }
    }

    /// Expiry year used by the test requests: next calendar year, two-digit.
    fn next_year() -> i32 {
        Utc::now().year() % 100 + 1
    }

    fn valid_request() -> ProcessPaymentRequest {
        ProcessPaymentRequest {
            card_number: "35231212224293937".to_string(),
            expiry_month: 1,
            expiry_year: next_year(),
            currency: "GBP".to_string(),
            amount: "10.60".to_string(),
            cvv: "123".to_string(),
        }
    }

    #[tokio::test]
    async fn authorized_payment_takes_the_bank_identifier() {
        let repo = MockRepo::new();
        let bank = MockBank::authorizing(AUTH_CODE);
        let calls = bank.call_counter();
        let service = PaymentGatewayService::new(repo.clone(), bank);

        let outcome = service.process_payment(valid_request()).await.unwrap();

        let PaymentOutcome::Authorized(payment) = outcome else {
            panic!("expected an authorized outcome");
        };
        assert_eq!(payment.id.to_string(), AUTH_CODE);
        assert_eq!(payment.status, PaymentStatus::Authorized);
        assert_eq!(payment.card_number_last_four, 3937);
        assert_eq!(payment.expiry_month, 1);
        assert_eq!(payment.expiry_year, next_year());
        assert_eq!(payment.amount, 1060);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(repo.stored(), 1);
    }

    #[tokio::test]
    async fn declined_payment_gets_a_fresh_identifier_each_time() {
        let repo = MockRepo::new();
        let service = PaymentGatewayService::new(repo.clone(), MockBank::declining());

        let first = service.process_payment(valid_request()).await.unwrap();
        let second = service.process_payment(valid_request()).await.unwrap();

        let (PaymentOutcome::Declined(a), PaymentOutcome::Declined(b)) = (first, second) else {
            panic!("expected two declined outcomes");
        };
        assert_eq!(a.status, PaymentStatus::Declined);
        assert_ne!(a.id, b.id);
        assert_eq!(repo.stored(), 2);
    }

    #[tokio::test]
    async fn card_ending_in_zero_never_reaches_the_bank() {
        let repo = MockRepo::new();
        let bank = MockBank::authorizing(AUTH_CODE);
        let calls = bank.call_counter();
        let service = PaymentGatewayService::new(repo.clone(), bank);

        let mut request = valid_request();
        request.card_number = "35231212224293930".to_string();

        let outcome = service.process_payment(request).await.unwrap();

        let PaymentOutcome::Rejected { message } = outcome else {
            panic!("expected a rejected outcome");
        };
        assert_eq!(
            message,
            "Bank payment unavailable for card number ends with 0"
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(repo.stored(), 0);
    }

    #[tokio::test]
    async fn validation_failure_skips_bank_and_store() {
        let repo = MockRepo::new();
        let bank = MockBank::authorizing(AUTH_CODE);
        let calls = bank.call_counter();
        let service = PaymentGatewayService::new(repo.clone(), bank);

        let mut request = valid_request();
        request.card_number = "352312122242A12B".to_string();

        let outcome = service.process_payment(request).await.unwrap();

        let PaymentOutcome::ValidationFailed { field, message } = outcome else {
            panic!("expected a validation failure");
        };
        assert_eq!(field, "card_number");
        assert_eq!(message, "Card number must contain only digits");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(repo.stored(), 0);
    }

    #[tokio::test]
    async fn first_violated_rule_is_the_one_reported() {
        let service = PaymentGatewayService::new(MockRepo::new(), MockBank::declining());

        // Card number violates both the digit and the length rule, and the
        // CVV is malformed too; the digit rule is reported.
        let mut request = valid_request();
        request.card_number = "12AB".to_string();
        request.cvv = "1".to_string();

        let outcome = service.process_payment(request).await.unwrap();

        let PaymentOutcome::ValidationFailed { field, .. } = outcome else {
            panic!("expected a validation failure");
        };
        assert_eq!(field, "card_number");
    }

    #[tokio::test]
    async fn malformed_amount_is_a_validation_failure() {
        let repo = MockRepo::new();
        let bank = MockBank::authorizing(AUTH_CODE);
        let calls = bank.call_counter();
        let service = PaymentGatewayService::new(repo.clone(), bank);

        let mut request = valid_request();
        request.amount = "10.601".to_string();

        let outcome = service.process_payment(request).await.unwrap();

        let PaymentOutcome::ValidationFailed { field, message } = outcome else {
            panic!("expected a validation failure");
        };
        assert_eq!(field, "amount");
        assert_eq!(message, "Amount must have at most 2 decimal places");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(repo.stored(), 0);
    }

    #[tokio::test]
    async fn bank_request_is_normalized() {
        let bank = MockBank::declining();
        let capture = bank.request_capture();
        let service = PaymentGatewayService::new(MockRepo::new(), bank);

        service.process_payment(valid_request()).await.unwrap();

        let sent = capture.lock().unwrap().clone().expect("bank was called");
        assert_eq!(sent.card_number, "35231212224293937");
        assert_eq!(sent.cvv, "123");
        assert_eq!(sent.amount, 1060);
        assert_eq!(sent.expiry_date, format!("01/{}", 2000 + next_year()));
    }

    #[tokio::test]
    async fn non_uuid_authorization_code_is_an_internal_error() {
        let repo = MockRepo::new();
        let service =
            PaymentGatewayService::new(repo.clone(), MockBank::authorizing("not-a-uuid"));

        let result = service.process_payment(valid_request()).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
        assert_eq!(repo.stored(), 0);
    }

    #[tokio::test]
    async fn bank_transport_failure_surfaces_as_internal_error() {
        let repo = MockRepo::new();
        let service = PaymentGatewayService::new(repo.clone(), MockBank::failing());

        let result = service.process_payment(valid_request()).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
        assert_eq!(repo.stored(), 0);
    }

    #[tokio::test]
    async fn processed_payment_round_trips_through_lookup() {
        let service = PaymentGatewayService::new(MockRepo::new(), MockBank::authorizing(AUTH_CODE));

        let outcome = service.process_payment(valid_request()).await.unwrap();
        let PaymentOutcome::Authorized(stored) = outcome else {
            panic!("expected an authorized outcome");
        };

        let fetched = service.get_payment(stored.id).await.unwrap();
        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn unknown_payment_id_is_not_found() {
        let service = PaymentGatewayService::new(MockRepo::new(), MockBank::declining());

        let result = service.get_payment(PaymentId::new()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
