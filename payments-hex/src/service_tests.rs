//! PaymentService and router unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use payments_types::{
        AppError, CreatePaymentRequest, Payment, PaymentId, PaymentRepository, RepoError,
    };

    use crate::PaymentService;
    use crate::inbound::HttpServer;

    /// Simple in-memory repository for testing the service layer.
    ///
    /// Flip `down` to make every call fail the way an unreachable store would.
    pub struct MockRepo {
        payments: Mutex<Vec<Payment>>,
        down: AtomicBool,
    }

    impl MockRepo {
        pub fn new() -> Self {
            Self {
                payments: Mutex::new(Vec::new()),
                down: AtomicBool::new(false),
            }
        }

        pub fn unreachable() -> Self {
            let repo = Self::new();
            repo.down.store(true, Ordering::SeqCst);
            repo
        }

        fn check(&self) -> Result<(), RepoError> {
            if self.down.load(Ordering::SeqCst) {
                return Err(RepoError::store("connection refused"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl PaymentRepository for MockRepo {
        async fn ping(&self) -> Result<(), RepoError> {
            self.check()
        }

        async fn list_payments(&self) -> Result<Vec<Payment>, RepoError> {
            self.check()?;
            Ok(self.payments.lock().unwrap().clone())
        }

        async fn insert_payment(&self, req: CreatePaymentRequest) -> Result<Payment, RepoError> {
            self.check()?;
            let amount = match req.amount {
                Some(a) => a
                    .as_text()
                    .parse::<f64>()
                    .map_err(|_| RepoError::store("invalid amount"))?,
                None => return Err(RepoError::store("null value in column \"amount\"")),
            };
            let currency = req
                .currency
                .ok_or_else(|| RepoError::store("null value in column \"currency\""))?;
            let status = req
                .status
                .ok_or_else(|| RepoError::store("null value in column \"status\""))?;

            let mut payments = self.payments.lock().unwrap();
            let id = PaymentId::from_i64(payments.len() as i64 + 1);
            let payment = Payment::from_parts(id, amount, currency, status);
            payments.push(payment.clone());
            Ok(payment)
        }
    }

    async fn body_json(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Service
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_then_list() {
        let service = PaymentService::new(MockRepo::new());

        let created = service
            .create_payment(CreatePaymentRequest::new(100.0, "USD", "pending"))
            .await
            .unwrap();
        let listed = service.list_payments().await.unwrap();

        assert_eq!(created.id, PaymentId::from_i64(1));
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_list_empty_is_not_an_error() {
        let service = PaymentService::new(MockRepo::new());

        let payments = service.list_payments().await.unwrap();

        assert!(payments.is_empty());
    }

    #[tokio::test]
    async fn test_store_errors_pass_through() {
        let service = PaymentService::new(MockRepo::unreachable());

        let list = service.list_payments().await;
        let create = service
            .create_payment(CreatePaymentRequest::new(1.0, "USD", "pending"))
            .await;
        let ready = service.readiness().await;

        let expected = AppError::Store("connection refused".to_string());
        assert_eq!(list.unwrap_err(), expected);
        assert_eq!(create.unwrap_err(), expected);
        assert_eq!(ready.unwrap_err(), expected);
    }

    #[tokio::test]
    async fn test_no_validation_on_tokens() {
        let service = PaymentService::new(MockRepo::new());

        let payment = service
            .create_payment(CreatePaymentRequest::new(-3.0, "XYZ", "refunded"))
            .await
            .unwrap();

        assert_eq!(payment.amount, -3.0);
        assert_eq!(payment.currency, "XYZ");
        assert_eq!(payment.status, "refunded");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Router
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_health_ignores_store_state() {
        let app = HttpServer::new(PaymentService::new(MockRepo::unreachable())).router();

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response.into_body()).await,
            serde_json::json!({ "status": "healthy" })
        );
    }

    #[tokio::test]
    async fn test_ready_when_store_down() {
        let app = HttpServer::new(PaymentService::new(MockRepo::unreachable())).router();

        let response = app.oneshot(get("/ready")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response.into_body()).await,
            serde_json::json!({ "status": "not ready", "error": "connection refused" })
        );
    }

    #[tokio::test]
    async fn test_list_when_store_down() {
        let app = HttpServer::new(PaymentService::new(MockRepo::unreachable())).router();

        let response = app.oneshot(get("/api/payments")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response.into_body()).await,
            serde_json::json!({ "error": "connection refused" })
        );
    }

    #[tokio::test]
    async fn test_create_missing_field_is_500() {
        let app = HttpServer::new(PaymentService::new(MockRepo::new())).router();

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/payments")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"amount": 5, "currency": "USD"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response.into_body()).await;
        assert!(json["error"].as_str().unwrap().contains("status"));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let app = HttpServer::new(PaymentService::new(MockRepo::new())).router();

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/payments")
                    .header("Origin", "http://example.com")
                    .header("Access-Control-Request-Method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let app = HttpServer::new(PaymentService::new(MockRepo::new())).router();

        let response = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        assert!(json["paths"]["/api/payments"].is_object());
    }
}
