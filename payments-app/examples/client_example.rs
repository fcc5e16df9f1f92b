//! Client example: boots a server on a SQLite file and drives it over HTTP.
//!
//! Run with: cargo run -p payments-app --example client_example --no-default-features --features sqlite

use payments_client::{CreatePaymentRequest, PaymentsClient};
use payments_hex::{PaymentService, inbound::HttpServer};
use payments_repo::{DatabaseSettings, build_repo};
use tempfile::tempdir;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Use a temp file-backed SQLite DB
    let tmp = tempdir()?;
    let db_path = tmp.path().join("payments.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let repo = build_repo(&DatabaseSettings::from_url(db_url)).await?;
    let router = HttpServer::new(PaymentService::new(repo)).router();

    // Bind first so the client never races the server
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    println!("🚀 Server on http://{addr}");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            eprintln!("server error: {e}");
        }
    });

    let client = PaymentsClient::new(format!("http://{addr}"));

    println!("✅ Healthy: {}", client.health().await?);
    println!("✅ Ready: {}", client.ready().await?.status);

    let empty = client.list_payments().await?;
    println!("📋 Payments before: {}", empty.len());

    for (amount, currency, status) in [
        (100.0, "USD", "pending"),
        (42.5, "EUR", "completed"),
        (999.0, "INR", "failed"),
    ] {
        let payment = client
            .create_payment(&CreatePaymentRequest::new(amount, currency, status))
            .await?;
        println!("✅ Payment created: {}", payment.id);
    }

    // A numeric string, as an HTML form would submit it
    let from_form = client
        .create_payment(&CreatePaymentRequest::new("12.34", "USD", "pending"))
        .await?;
    println!("✅ Payment created from text amount: {} ({})", from_form.id, from_form.amount);

    // Missing fields are rejected by the store, not the service
    let rejected = client
        .create_payment(&CreatePaymentRequest {
            currency: Some("USD".into()),
            ..Default::default()
        })
        .await;
    println!("✅ Incomplete payment rejected: {}", rejected.unwrap_err());

    println!("\n📋 All payments:");
    for p in client.list_payments().await? {
        println!("   - #{} {} {} ({})", p.id, p.amount, p.currency, p.status);
    }

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
