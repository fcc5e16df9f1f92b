//! Payment Application Service
//!
//! Drives the repository port. Contains NO infrastructure logic and no
//! business rules: every operation is a pass-through to the store.

use payments_types::{AppError, CreatePaymentRequest, Payment, PaymentRepository};

/// Application service for payment operations.
///
/// Generic over `R: PaymentRepository` - the adapter is injected at compile time.
/// This enables:
/// - Swapping repositories without code changes
/// - Testing with in-memory repo
/// - Compile-time checks for port implementation
pub struct PaymentService<R: PaymentRepository> {
    repo: R,
}

impl<R: PaymentRepository> PaymentService<R> {
    /// Creates a new payment service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Checks that the store answers a trivial query.
    pub async fn readiness(&self) -> Result<(), AppError> {
        self.repo.ping().await.map_err(|e| {
            tracing::warn!(error = %e, "Store is not reachable");
            e.into()
        })
    }

    /// Lists all payments, oldest first.
    pub async fn list_payments(&self) -> Result<Vec<Payment>, AppError> {
        self.repo.list_payments().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list payments");
            e.into()
        })
    }

    /// Records a new payment exactly as supplied.
    pub async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, AppError> {
        let payment = self.repo.insert_payment(req).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create payment");
            AppError::from(e)
        })?;

        tracing::debug!(payment_id = %payment.id, "Payment created");
        Ok(payment)
    }
}
