//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use payments_types::{
        Amount, CreatePaymentRequest, PaymentId, PaymentRepository, RepoError,
    };

    use crate::SqliteRepo;

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let repo = setup_repo().await;

        assert!(repo.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_ping_after_close_fails() {
        let repo = setup_repo().await;
        repo.pool().close().await;

        let err = repo.ping().await.unwrap_err();

        let RepoError::Store(msg) = err;
        assert!(!msg.is_empty());
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = setup_repo().await;

        let payments = repo.list_payments().await.unwrap();

        assert!(payments.is_empty());
    }

    #[tokio::test]
    async fn test_insert_payment() {
        let repo = setup_repo().await;

        let payment = repo
            .insert_payment(CreatePaymentRequest::new(100.0, "USD", "pending"))
            .await
            .unwrap();

        assert_eq!(payment.id, PaymentId::from_i64(1));
        assert_eq!(payment.amount, 100.0);
        assert_eq!(payment.currency, "USD");
        assert_eq!(payment.status, "pending");
    }

    #[tokio::test]
    async fn test_insert_then_list() {
        let repo = setup_repo().await;

        let created = repo
            .insert_payment(CreatePaymentRequest::new(42.5, "EUR", "completed"))
            .await
            .unwrap();

        let payments = repo.list_payments().await.unwrap();

        assert_eq!(payments, vec![created]);
    }

    #[tokio::test]
    async fn test_ids_are_distinct_and_ordered() {
        let repo = setup_repo().await;

        for i in 0..5 {
            repo.insert_payment(CreatePaymentRequest::new(i as f64, "INR", "pending"))
                .await
                .unwrap();
        }

        let payments = repo.list_payments().await.unwrap();
        let ids: Vec<i64> = payments.iter().map(|p| p.id.as_i64()).collect();
        let unique: HashSet<i64> = ids.iter().copied().collect();

        assert_eq!(ids.len(), 5);
        assert_eq!(unique.len(), 5);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(payments[3].amount, 3.0);
    }

    #[tokio::test]
    async fn test_numeric_string_amount_is_coerced() {
        let repo = setup_repo().await;

        let payment = repo
            .insert_payment(CreatePaymentRequest::new(" 19.99 ", "USD", "pending"))
            .await
            .unwrap();

        assert_eq!(payment.amount, 19.99);
    }

    #[tokio::test]
    async fn test_non_numeric_amount_is_store_error() {
        let repo = setup_repo().await;

        let result = repo
            .insert_payment(CreatePaymentRequest::new("lots", "USD", "pending"))
            .await;

        assert!(matches!(result, Err(RepoError::Store(msg)) if msg.contains("lots")));
        assert!(repo.list_payments().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_finite_amount_is_store_error() {
        let repo = setup_repo().await;

        for text in ["inf", "-Infinity", "NaN"] {
            let result = repo
                .insert_payment(CreatePaymentRequest::new(text, "USD", "pending"))
                .await;

            assert!(
                matches!(result, Err(RepoError::Store(ref msg)) if msg.contains("payments_amount_finite")),
                "{text} was accepted: {result:?}"
            );
        }

        let result = repo
            .insert_payment(CreatePaymentRequest::new(f64::INFINITY, "USD", "pending"))
            .await;
        assert!(result.is_err());

        assert!(repo.list_payments().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_field_rejected_by_store() {
        let repo = setup_repo().await;

        let result = repo
            .insert_payment(CreatePaymentRequest {
                amount: Some(Amount::Number(10.0)),
                currency: None,
                status: Some("pending".to_string()),
            })
            .await;

        assert!(matches!(result, Err(RepoError::Store(msg)) if msg.contains("NOT NULL")));
    }

    #[tokio::test]
    async fn test_free_form_tokens_accepted() {
        let repo = setup_repo().await;

        let payment = repo
            .insert_payment(CreatePaymentRequest::new(-5.0, "DOGE", "whatever"))
            .await
            .unwrap();

        assert_eq!(payment.amount, -5.0);
        assert_eq!(payment.currency, "DOGE");
        assert_eq!(payment.status, "whatever");
    }

    #[tokio::test]
    async fn test_file_backed_database() {
        let dir = std::env::temp_dir().join(format!("payments-repo-test-{}", std::process::id()));
        let url = format!("sqlite://{}/nested/payments.db?mode=rwc", dir.display());

        {
            let repo = SqliteRepo::new(&url).await.unwrap();
            repo.insert_payment(CreatePaymentRequest::new(7.0, "USD", "failed"))
                .await
                .unwrap();
            repo.pool().close().await;
        }

        let reopened = SqliteRepo::new(&url).await.unwrap();
        let payments = reopened.list_payments().await.unwrap();
        reopened.pool().close().await;
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].status, "failed");
    }
}
