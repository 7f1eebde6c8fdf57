//! Invoice Core - Console Dashboard Summary
//!
//! Logs into the invoicing API and prints the dashboard summary: KPI
//! figures plus the due-soon list, with the overdue/due-soon fallback
//! derivation already applied.
//!
//! # Usage
//!
//! ```bash
//! # Uses a previously stored token if present
//! cargo run --bin invoice-summary
//!
//! # Or log in explicitly
//! INVOICE_BASE_URL=https://api.example.com \
//!   INVOICE_EMAIL=me@example.com INVOICE_PASSWORD=secret \
//!   cargo run --bin invoice-summary
//! ```
//!
//! # Environment Variables
//!
//! * `INVOICE_BASE_URL` - API base URL
//! * `INVOICE_TOKEN_PATH` - where the bearer token is persisted
//! * `INVOICE_EMAIL` / `INVOICE_PASSWORD` - credentials for login when no
//!   token is stored
//! * `INVOICE_DUE_SOON_DAYS` - due-soon window (default 7)
//! * `INVOICE_TIMEZONE` - business timezone (default Asia/Jakarta)
//! * `INVOICE_LOG_LEVEL` - trace, debug, info, warn, error (default info)

use api_client::{ApiClient, ClientConfig, DashboardQuery, LoginRequest};
use core_kernel::{Currency, Money};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env().unwrap_or_default();
    init_tracing(&config.log_level);

    tracing::info!(base_url = %config.base_url, "Starting invoice summary");

    let client = ApiClient::new(config)?;
    ensure_logged_in(&client).await?;

    let query = DashboardQuery::default();
    let view = match client.dashboard_summary(&query).await {
        Ok(view) => view,
        Err(err) => {
            // The operation already produced a displayable message.
            eprintln!("{}", err.user_message());
            return Err(err.into());
        }
    };

    let currency = Currency::default();
    let kpis = &view.summary.kpis;

    println!("Dashboard");
    println!("  Outstanding : {}", Money::new(kpis.total_outstanding, currency));
    println!(
        "  Paid        : {}",
        Money::new(kpis.total_paid_this_month, currency)
    );
    println!("  Invoices    : {}", kpis.invoices_this_month);
    println!("  Overdue     : {}", view.overdue_count);

    if view.due_soon.is_empty() {
        println!("No invoices due in the next {} days.", query.due_soon_days);
    } else {
        println!("Due soon:");
        for invoice in &view.due_soon {
            let client_name = invoice
                .client
                .as_ref()
                .map(|c| c.name.as_str())
                .unwrap_or("-");
            println!(
                "  {:<16} {:<24} due {:<12} {}",
                invoice.invoice_number,
                client_name,
                invoice.due_date,
                Money::new(invoice.total, currency)
            );
        }
    }

    Ok(())
}

/// Logs in with environment credentials when no stored session exists
async fn ensure_logged_in(client: &ApiClient) -> Result<(), Box<dyn std::error::Error>> {
    if client.is_authenticated().await {
        return Ok(());
    }

    let email = std::env::var("INVOICE_EMAIL").ok();
    let password = std::env::var("INVOICE_PASSWORD").ok();

    match (email, password) {
        (Some(email), Some(password)) => {
            client.login(LoginRequest::new(email, password)).await?;
            tracing::info!("Logged in");
            Ok(())
        }
        _ => Err(
            "No stored token and no INVOICE_EMAIL/INVOICE_PASSWORD set; cannot authenticate"
                .into(),
        ),
    }
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
