//! Shared database row types for SQLite and PostgreSQL.

use sqlx::FromRow;

use payments_types::{Payment, PaymentId, RepoError};

/// Payment row from database.
///
/// Both backends store the id as a 64-bit integer and the amount as a
/// double, so one row type serves both.
#[derive(FromRow)]
pub struct DbPayment {
    pub id: i64,
    pub amount: f64,
    pub currency: String,
    pub status: String,
}

impl DbPayment {
    pub fn into_domain(self) -> Payment {
        Payment::from_parts(
            PaymentId::from_i64(self.id),
            self.amount,
            self.currency,
            self.status,
        )
    }
}

/// Collapses a driver error into the store error kind.
///
/// Database-reported errors keep only the server's message; everything
/// else (IO, pool, protocol) uses the driver's own description.
pub fn store_error(err: sqlx::Error) -> RepoError {
    match err {
        sqlx::Error::Database(db) => RepoError::Store(db.message().to_string()),
        other => RepoError::store(other),
    }
}
