//! Gateway CLI
//!
//! Command-line interface for the Payment Gateway API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use gateway_client::{ClientError, GatewayClient};
use gateway_types::{PaymentId, ProcessPaymentRequest};

#[derive(Parser)]
#[command(name = "gateway")]
#[command(author, version, about = "Payment Gateway CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Payment Gateway API
    #[arg(long, env = "GATEWAY_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a card payment for processing
    Pay {
        /// Card number (14-19 digits)
        #[arg(long)]
        card_number: String,
        /// Expiry month (1-12)
        #[arg(long)]
        expiry_month: i32,
        /// Two-digit expiry year
        #[arg(long)]
        expiry_year: i32,
        /// Currency (USD, EUR, GBP)
        #[arg(long, default_value = "USD")]
        currency: String,
        /// Decimal amount in major units, e.g. 10.60
        #[arg(long)]
        amount: String,
        /// Card verification value
        #[arg(long)]
        cvv: String,
    },
    /// Fetch a stored payment by ID
    Get {
        /// Payment ID (UUID)
        id: String,
    },
    /// Check API health
    Health,
}

fn parse_payment_id(s: &str) -> Result<PaymentId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid payment ID: {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = GatewayClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Pay {
            card_number,
            expiry_month,
            expiry_year,
            currency,
            amount,
            cvv,
        } => {
            let request = ProcessPaymentRequest {
                card_number,
                expiry_month,
                expiry_year,
                currency,
                amount,
                cvv,
            };

            match client.process_payment(&request).await {
                Ok(payment) => println!("{}", serde_json::to_string_pretty(&payment)?),
                Err(ClientError::Api { status, message }) => {
                    eprintln!("✗ Payment not processed ({}): {}", status, message);
                    std::process::exit(1);
                }
                Err(err) => return Err(err.into()),
            }
        }

        Commands::Get { id } => {
            let payment_id = parse_payment_id(&id)?;
            let payment = client.get_payment(payment_id).await?;
            println!("{}", serde_json::to_string_pretty(&payment)?);
        }
    }

    Ok(())
}
