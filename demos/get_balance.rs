//! Fetch app balances from the Crypto Pay Gateway.
//!
//! To run this example:
//! ```bash
//! export CRYPTO_PAY_API_TOKEN="your-token-here"
//! cargo run --example get_balance
//! ```

use crypto_pay_client::{ApiResponse, Client, ClientOptions, Query};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Balance {
    currency_code: String,
    available: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new(ClientOptions {
        api_token: std::env::var("CRYPTO_PAY_API_TOKEN")
            .expect("CRYPTO_PAY_API_TOKEN environment variable must be set"),
        testing: true,
        ..ClientOptions::default()
    })?;

    println!("=== Example 1: Balances ===\n");

    let response = client.request("getBalance", None).await?;
    println!("Status: {}", response.status());

    let balances: ApiResponse<Vec<Balance>> = response.json().await?;
    match balances.result {
        Some(items) => {
            for balance in items {
                println!("{}: {}", balance.currency_code, balance.available);
            }
        }
        None => println!("API error: {:?}", balances.error),
    }

    println!("\n=== Example 2: Invoices filtered by asset ===\n");

    let response = client
        .request(
            "getInvoices",
            Some(&|mut query: Query| {
                query.insert("asset".to_string(), "USDT".to_string());
                query
            }),
        )
        .await?;

    let invoices: ApiResponse<serde_json::Value> = response.json().await?;
    println!("{}", serde_json::to_string_pretty(&invoices.result)?);

    Ok(())
}
