//! Client library for the Crypto Pay payment-processing Gateway.
//!
//! All Gateway methods are plain authenticated HTTP GET calls: the client
//! builds the URL for the selected environment (mainnet or testnet), applies
//! caller-supplied query parameters, attaches the `Crypto-Pay-API-Token`
//! header and hands back the response for JSON decoding. There is no retry,
//! caching or status-code interpretation — API-level failures are reported
//! inside the Gateway's JSON envelope and left to the caller.
//!
//! # Examples
//!
//! ## Simple request
//!
//! ```no_run
//! use crypto_pay_client::{ApiResponse, Client, ClientOptions};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Balance {
//!     currency_code: String,
//!     available: String,
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(ClientOptions {
//!     api_token: "12345:AAzQcW3kmvZt".to_string(),
//!     ..ClientOptions::default()
//! })?;
//!
//! let response = client.request("getBalance", None).await?;
//! let balances: ApiResponse<Vec<Balance>> = response.json().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Query parameters
//!
//! ```no_run
//! use crypto_pay_client::{Client, ClientOptions, Query};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = Client::new(ClientOptions::default())?;
//! let response = client
//!     .request(
//!         "getInvoices",
//!         Some(&|mut query: Query| {
//!             query.insert("asset".to_string(), "USDT".to_string());
//!             query
//!         }),
//!     )
//!     .await?;
//! let invoices: serde_json::Value = response.json().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testnet and transport options
//!
//! ```no_run
//! use std::time::Duration;
//! use crypto_pay_client::{Client, ClientOptions};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(ClientOptions {
//!     api_token: "12345:AAzQcW3kmvZt".to_string(),
//!     testing: true,
//!     client_timeout: Some(Duration::from_secs(10)),
//!     proxy_url: Some("socks5://127.0.0.1:9050".parse()?),
//! })?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod response;
mod types;

// Re-export public API
pub use client::{Client, ClientOptions, Query};
pub use error::Error;
pub use response::{BoxStream, Response};
pub use types::{ApiError, ApiResponse};

// Re-export commonly used types from dependencies
pub use http::StatusCode;
pub use reqwest::Url;
