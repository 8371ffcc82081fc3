use std::collections::BTreeMap;
use std::time::Duration;

use futures::TryStreamExt;
use reqwest::Url;
use tracing::debug;

use crate::error::Error;
use crate::response::Response;

const MAINNET_API_URL: &str = "https://pay.crypt.bot/api/";
const TESTNET_API_URL: &str = "https://testnet-pay.crypt.bot/api/";
const API_TOKEN_HEADER: &str = "Crypto-Pay-API-Token";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameters of an outbound request, ordered by key.
pub type Query = BTreeMap<String, String>;

/// Configuration for [`Client`]
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// API token of your Crypto Pay app (a testnet token also works when
    /// `testing` is set). Sent verbatim with every request; not validated
    pub api_token: String,

    /// Default false. Request the testnet Gateway instead of mainnet
    pub testing: bool,

    /// Optional. Defaults to 30 seconds when unset or zero
    pub client_timeout: Option<Duration>,

    /// Optional. Route all outbound requests through this proxy
    pub proxy_url: Option<Url>,
}

/// Client for making requests to Crypto Pay API methods
///
/// Configuration is fixed at construction and the underlying transport is
/// safe for concurrent reuse, so one `Client` can be shared across tasks.
pub struct Client {
    api_token: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a client from options
    ///
    /// Selects the mainnet or testnet base URL from `testing` and configures
    /// one HTTP transport with the timeout and optional proxy for the
    /// client's lifetime. The token is not validated; an empty token is
    /// still attached to every request.
    pub fn new(options: ClientOptions) -> Result<Self, Error> {
        let base_url = if options.testing {
            TESTNET_API_URL
        } else {
            MAINNET_API_URL
        };
        Self::with_base_url(options, base_url)
    }

    /// Create a client against an explicit base URL (must end with `/`).
    /// Exists so tests can target a local mock server.
    #[doc(hidden)]
    pub fn with_base_url(
        options: ClientOptions,
        base_url: impl Into<String>,
    ) -> Result<Self, Error> {
        let timeout = effective_timeout(options.client_timeout);

        let mut builder = reqwest::Client::builder().timeout(timeout);
        if let Some(proxy_url) = options.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| Error::RequestConstruction(e.to_string()))?;
            builder = builder.proxy(proxy);
        }
        let http_client = builder
            .build()
            .map_err(|e| Error::RequestConstruction(e.to_string()))?;

        Ok(Self {
            api_token: options.api_token,
            base_url: base_url.into(),
            http_client,
        })
    }

    /// Perform a GET request against the Gateway
    ///
    /// `path` is appended to the base URL. `query_modifier`, when present,
    /// receives the (initially empty) query parameters and its return value
    /// becomes the request's query string; `None` sends no query string.
    ///
    /// The response is returned whatever its HTTP status — API-level errors
    /// live inside the JSON envelope and are the caller's to interpret. The
    /// caller is also responsible for consuming or dropping the body.
    pub async fn request(
        &self,
        path: &str,
        query_modifier: Option<&dyn Fn(Query) -> Query>,
    ) -> Result<Response, Error> {
        let url = self.build_url(path, query_modifier)?;
        debug!(%url, "sending gateway request");

        let resp = self
            .http_client
            .get(url)
            .header(API_TOKEN_HEADER, &self.api_token)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let stream = resp.bytes_stream().map_err(Error::Read);

        Ok(Response::new(status, headers, Box::pin(stream)))
    }

    fn build_url(
        &self,
        path: &str,
        query_modifier: Option<&dyn Fn(Query) -> Query>,
    ) -> Result<Url, Error> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| Error::RequestConstruction(e.to_string()))?;

        if let Some(modify) = query_modifier {
            let query: Query = url.query_pairs().into_owned().collect();
            let query = modify(query);
            if query.is_empty() {
                url.set_query(None);
            } else {
                let mut pairs = url.query_pairs_mut();
                pairs.clear();
                for (key, value) in &query {
                    pairs.append_pair(key, value);
                }
            }
        }

        Ok(url)
    }
}

fn effective_timeout(client_timeout: Option<Duration>) -> Duration {
    // Zero means unset, same as no value at all
    client_timeout
        .filter(|t| !t.is_zero())
        .unwrap_or(DEFAULT_TIMEOUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(testing: bool) -> Client {
        Client::new(ClientOptions {
            api_token: "test-token".to_string(),
            testing,
            ..ClientOptions::default()
        })
        .unwrap()
    }

    #[test]
    fn test_mainnet_base_url() {
        let url = client(false).build_url("getBalance", None).unwrap();
        assert!(url.as_str().starts_with(MAINNET_API_URL));
        assert_eq!(url.as_str(), "https://pay.crypt.bot/api/getBalance");
    }

    #[test]
    fn test_testnet_base_url() {
        let url = client(true).build_url("getBalance", None).unwrap();
        assert!(url.as_str().starts_with(TESTNET_API_URL));
    }

    #[test]
    fn test_no_modifier_means_no_query_string() {
        let url = client(false).build_url("getBalance", None).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_modifier_sets_query_parameters() {
        let modifier = |mut query: Query| {
            query.insert("asset".to_string(), "USDT".to_string());
            query
        };
        let url = client(false)
            .build_url("getInvoices", Some(&modifier))
            .unwrap();
        assert_eq!(url.query(), Some("asset=USDT"));
        assert_eq!(url.as_str().matches("asset=USDT").count(), 1);
    }

    #[test]
    fn test_modifier_output_is_ordered_by_key() {
        let modifier = |mut query: Query| {
            query.insert("status".to_string(), "active".to_string());
            query.insert("asset".to_string(), "TON".to_string());
            query
        };
        let url = client(false)
            .build_url("getInvoices", Some(&modifier))
            .unwrap();
        assert_eq!(url.query(), Some("asset=TON&status=active"));
    }

    #[test]
    fn test_modifier_returning_empty_map_leaves_no_query() {
        let modifier = |_query: Query| Query::new();
        let url = client(false)
            .build_url("getBalance", Some(&modifier))
            .unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_query_values_are_url_encoded() {
        let modifier = |mut query: Query| {
            query.insert("description".to_string(), "two words".to_string());
            query
        };
        let url = client(false)
            .build_url("createInvoice", Some(&modifier))
            .unwrap();
        assert_eq!(url.query(), Some("description=two+words"));
    }

    #[test]
    fn test_default_timeout_applies_to_unset_and_zero() {
        assert_eq!(effective_timeout(None), Duration::from_secs(30));
        assert_eq!(
            effective_timeout(Some(Duration::ZERO)),
            Duration::from_secs(30)
        );
        assert_eq!(
            effective_timeout(Some(Duration::from_secs(5))),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn test_construction_accepts_empty_token() {
        let client = Client::new(ClientOptions::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_construction_with_proxy() {
        let client = Client::new(ClientOptions {
            api_token: "test-token".to_string(),
            proxy_url: Some(Url::parse("http://127.0.0.1:8888").unwrap()),
            ..ClientOptions::default()
        });
        assert!(client.is_ok());
    }
}
