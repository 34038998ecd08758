//! API-Football client.
//!
//! Low-level HTTP client that handles authentication and the request
//! pipeline shared by every endpoint. Endpoint operations are implemented via
//! the [`Fetch`](crate::Fetch) trait on record types.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, Request};
use serde::Serialize;
use url::Url;

use crate::config::{ClientConfig, Subscription};
use crate::envelope::{self, Envelope};
use crate::error::{FootballError, Result};
use crate::query;
use crate::validate::Validate;

const USER_AGENT: &str = concat!("footballapi/", env!("CARGO_PKG_VERSION"));

/// Low-level API-Football client.
///
/// Holds the resolved configuration and a connection pool. Endpoint
/// operations are implemented via the `Fetch` trait on record types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use footballapi::{ClientConfig, FootballClient, Subscription};
///
/// # fn example() -> footballapi::Result<()> {
/// // Create from environment variables
/// let client = FootballClient::from_env(Subscription::ApiSports)?;
///
/// // Or configure manually
/// let client = FootballClient::new(ClientConfig::new(Subscription::RapidApi, "your-key"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FootballClient {
    http: Client,
    base_url: Arc<Url>,
    subscription: Subscription,
    key_header: HeaderName,
    key_value: HeaderValue,
}

impl std::fmt::Debug for FootballClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FootballClient")
            .field("subscription", &self.subscription)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl FootballClient {
    /// Create a client whose API key comes from the subscription's
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the key variable is not set or the base URL is
    /// invalid.
    pub fn from_env(subscription: Subscription) -> Result<Self> {
        Self::new(ClientConfig::from_env(subscription)?)
    }

    /// Create a new client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the API key cannot be
    /// sent as a header value.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Ensure base URL ends with / so relative joins keep its path
        let base_url_str = if config.base_url().ends_with('/') {
            config.base_url().to_string()
        } else {
            format!("{}/", config.base_url())
        };

        let base_url = Url::parse(&base_url_str)?;

        let subscription = config.subscription();
        let key_header = HeaderName::from_static(subscription.api_key_header());
        let mut key_value = HeaderValue::from_str(config.api_key()).map_err(|_| {
            FootballError::ConfigMissing(format!(
                "{} contains characters not allowed in a header",
                subscription.api_key_env()
            ))
        })?;
        key_value.set_sensitive(true);

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(FootballError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            subscription,
            key_header,
            key_value,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the subscription mode.
    pub fn subscription(&self) -> Subscription {
        self.subscription
    }

    /// Build a GET request for `path` with an already encoded query.
    ///
    /// `path` is an endpoint path such as `/countries`; it is resolved
    /// relative to the base URL. No query (or an empty one) leaves the URL
    /// without a `?`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built.
    pub fn build_request(&self, path: &str, query: Option<&str>) -> Result<Request> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        url.set_query(query.filter(|q| !q.is_empty()));

        self.http
            .get(url)
            .header(self.key_header.clone(), self.key_value.clone())
            .build()
            .map_err(FootballError::HttpError)
    }

    /// Send a request and read the whole body.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange fails or the body cannot be read.
    #[tracing::instrument(skip_all, fields(url = %request.url()))]
    pub async fn send(&self, request: Request) -> Result<(u16, Vec<u8>)> {
        let response = self
            .http
            .execute(request)
            .await
            .map_err(FootballError::HttpError)?;

        let status = response.status().as_u16();
        tracing::debug!(status, "response received");

        let body = response.bytes().await.map_err(FootballError::HttpError)?;
        Ok((status, body.to_vec()))
    }

    /// Run the shared pipeline for one endpoint: validate and encode
    /// `params`, send the request and decode the envelope.
    ///
    /// `None` skips validation and encoding entirely.
    ///
    /// # Errors
    ///
    /// Validation, transport, API, unknown-status and decoding errors, each
    /// returned unchanged from the stage that produced it.
    #[tracing::instrument(skip(self, params))]
    pub async fn get<P>(&self, path: &str, params: Option<&P>) -> Result<Envelope>
    where
        P: Serialize + Validate + Sync,
    {
        let query = query::prepare(params)?;
        let request = self.build_request(path, query.as_deref())?;
        tracing::debug!(url = %request.url(), "sending request");

        let (status, body) = self.send(request).await?;
        envelope::decode(status, &body)
    }
}
