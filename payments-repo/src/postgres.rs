//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use payments_types::{Amount, CreatePaymentRequest, Payment, PaymentRepository, RepoError};

use crate::schema::SchemaGuard;
use crate::settings::DatabaseSettings;
use crate::types::{DbPayment, store_error};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

const SCHEMA: &str = include_str!("../schema/payments_pg.sql");

/// PostgreSQL repository.
///
/// The pool connects lazily: the server comes up even when the database is
/// down, and the readiness probe reports the failure. The `payments` table is
/// created on the first successful contact.
pub struct PostgresRepo {
    pool: PgPool,
    schema: SchemaGuard,
}

impl PostgresRepo {
    /// Creates a repository and makes a first attempt to create the
    /// `payments` table. A failed attempt is retried by the next payments call.
    pub async fn new(settings: &DatabaseSettings) -> anyhow::Result<Self> {
        let options = settings.pg_connect_options()?;
        let pool = PgPoolOptions::new().connect_lazy_with(options);
        let repo = Self::from_pool(pool);

        if let Err(e) = repo.ensure_schema().await {
            tracing::warn!(error = %e, "Could not ensure payments table exists; will retry");
        }

        Ok(repo)
    }

    /// Wraps an existing pool. The schema is ensured on first use.
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            pool,
            schema: SchemaGuard::new(),
        }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
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

    async fn ensure_schema(&self) -> Result<(), RepoError> {
        self.schema.ensure(|| self.create_schema()).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for PostgresRepo {
    async fn ping(&self) -> Result<(), RepoError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(())
    }

    async fn list_payments(&self) -> Result<Vec<Payment>, RepoError> {
        self.ensure_schema().await?;

        let rows: Vec<DbPayment> =
            sqlx::query_as(r#"SELECT id, amount, currency, status FROM payments ORDER BY id"#)
                .fetch_all(&self.pool)
                .await
                .map_err(store_error)?;

        Ok(rows.into_iter().map(DbPayment::into_domain).collect())
    }

    async fn insert_payment(&self, req: CreatePaymentRequest) -> Result<Payment, RepoError> {
        self.ensure_schema().await?;

        // The amount is always bound as text so Postgres performs the numeric
        // coercion and reports malformed input itself.
        let amount = req.amount.as_ref().map(Amount::as_text);

        let row: DbPayment = sqlx::query_as(
            r#"INSERT INTO payments (amount, currency, status)
               VALUES (CAST($1 AS DOUBLE PRECISION), $2, $3)
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
