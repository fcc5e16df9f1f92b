//! SQLite repository adapter.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use payments_types::{Amount, CreatePaymentRequest, Payment, PaymentRepository, RepoError};

use crate::types::{DbPayment, store_error};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

const SCHEMA: &str = include_str!("../schema/payments_sqlite.sql");

/// Name of the Postgres check that keeps amounts finite.
pub(crate) const AMOUNT_FINITE_CONSTRAINT: &str = "payments_amount_finite";

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository and its `payments` table.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // An in-memory database lives only as long as its connections; one
        // connection keeps every query on the same database.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let repo = Self { pool };
        repo.create_schema().await?;
        Ok(repo)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the `payments` table if it does not exist.
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(())
    }
}

/// SQLite silently casts garbage text to 0, so numeric coercion happens here.
///
/// Infinite and NaN amounts are refused with the same message the Postgres
/// check constraint reports.
fn coerce_amount(amount: Option<&Amount>) -> Result<Option<f64>, RepoError> {
    let value = match amount {
        None => return Ok(None),
        Some(Amount::Number(n)) => *n,
        Some(Amount::Text(s)) => s.trim().parse::<f64>().map_err(|_| {
            RepoError::Store(format!("invalid input syntax for type real: \"{}\"", s))
        })?,
    };

    if !value.is_finite() {
        return Err(RepoError::Store(format!(
            "new row for relation \"payments\" violates check constraint \"{}\"",
            AMOUNT_FINITE_CONSTRAINT
        )));
    }
    Ok(Some(value))
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for SqliteRepo {
    async fn ping(&self) -> Result<(), RepoError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(())
    }

    async fn list_payments(&self) -> Result<Vec<Payment>, RepoError> {
        let rows: Vec<DbPayment> =
            sqlx::query_as(r#"SELECT id, amount, currency, status FROM payments ORDER BY id"#)
                .fetch_all(&self.pool)
                .await
                .map_err(store_error)?;

        Ok(rows.into_iter().map(DbPayment::into_domain).collect())
    }

    async fn insert_payment(&self, req: CreatePaymentRequest) -> Result<Payment, RepoError> {
        let amount = coerce_amount(req.amount.as_ref())?;

        let row: DbPayment = sqlx::query_as(
            r#"INSERT INTO payments (amount, currency, status) VALUES (?, ?, ?)
               RETURNING id, amount, currency, status"#,
        )
        .bind(amount)
        .bind(req.currency)
        .bind(req.status)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.into_domain())
    }
}
