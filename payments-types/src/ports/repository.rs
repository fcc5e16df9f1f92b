//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (Postgres, SQLite, in-memory mocks) implement this trait.

use crate::domain::Payment;
use crate::dto::CreatePaymentRequest;
use crate::error::RepoError;

/// The store port for payment records.
///
/// Every method maps to a single statement against the store. Implementations
/// report any failure as [`RepoError::Store`] carrying the driver's message.
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Performs a trivial round-trip against the store.
    async fn ping(&self) -> Result<(), RepoError>;

    /// Lists every payment, ordered by id ascending.
    async fn list_payments(&self) -> Result<Vec<Payment>, RepoError>;

    /// Inserts a payment and returns it with its store-assigned id.
    ///
    /// Absent fields are passed to the store as NULL; the store decides
    /// whether to accept them.
    async fn insert_payment(&self, req: CreatePaymentRequest) -> Result<Payment, RepoError>;
}
