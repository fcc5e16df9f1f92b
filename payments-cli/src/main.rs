//! Payments CLI
//!
//! Command-line view over the Payments API: a create form and a payments table.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use payments_client::{CreatePaymentRequest, Payment, PaymentsClient};

#[derive(Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Payments API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Payments API
    #[arg(
        long,
        env = "PAYMENTS_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all payments
    List,
    /// Create a payment, then show all payments
    Create {
        /// Amount
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        #[arg(long, value_enum, default_value_t = CurrencyChoice::Usd)]
        currency: CurrencyChoice,
        #[arg(long, value_enum, default_value_t = StatusChoice::Pending)]
        status: StatusChoice,
    },
    /// Check API liveness
    Health,
    /// Check API readiness (store reachability)
    Ready,
}

/// Currencies offered by the view. The server accepts any token.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum CurrencyChoice {
    #[value(name = "USD")]
    Usd,
    #[value(name = "EUR")]
    Eur,
    #[value(name = "INR")]
    Inr,
}

impl CurrencyChoice {
    fn as_str(self) -> &'static str {
        match self {
            CurrencyChoice::Usd => "USD",
            CurrencyChoice::Eur => "EUR",
            CurrencyChoice::Inr => "INR",
        }
    }
}

/// Statuses offered by the view. The server accepts any token.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum StatusChoice {
    Pending,
    Completed,
    Failed,
}

impl StatusChoice {
    fn as_str(self) -> &'static str {
        match self {
            StatusChoice::Pending => "pending",
            StatusChoice::Completed => "completed",
            StatusChoice::Failed => "failed",
        }
    }
}

/// Renders payments as a plain-text table.
fn render_table(payments: &[Payment]) -> String {
    if payments.is_empty() {
        return "No payments found".to_string();
    }

    let rows: Vec<[String; 4]> = payments
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.amount.to_string(),
                p.currency.clone(),
                p.status.clone(),
            ]
        })
        .collect();

    let header = ["ID", "Amount", "Currency", "Status"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let line = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{:<w$}", c, w = w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(header)];
    out.extend(
        rows.iter()
            .map(|r| line([r[0].as_str(), r[1].as_str(), r[2].as_str(), r[3].as_str()])),
    );
    out.join("\n")
}

async fn show_payments(client: &PaymentsClient) -> Result<()> {
    let payments = client
        .list_payments()
        .await
        .map_err(|e| anyhow::anyhow!("Error fetching payments: {}", e))?;
    println!("{}", render_table(&payments));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = PaymentsClient::new(&cli.api_url);

    match cli.command {
        Commands::List => show_payments(&client).await?,

        Commands::Create {
            amount,
            currency,
            status,
        } => {
            let req = CreatePaymentRequest::new(amount, currency.as_str(), status.as_str());
            let payment = client
                .create_payment(&req)
                .await
                .map_err(|e| anyhow::anyhow!("Error creating payment: {}", e))?;
            println!("Payment created: {}", payment.id);
            println!();
            show_payments(&client).await?;
        }

        Commands::Health => {
            if client.health().await? {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Ready => {
            let ready = client.ready().await?;
            match ready.error {
                None => println!("✓ API is {}", ready.status),
                Some(error) => {
                    println!("✗ API is {}: {}", ready.status, error);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
