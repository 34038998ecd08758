//! Fetch trait for querying an endpoint.

use async_trait::async_trait;

use crate::client::FootballClient;
use crate::error::Result;
use crate::response::ApiResponse;

/// Query one API-Football endpoint for records of this type.
///
/// Implement this trait for record types that an endpoint returns as a list.
///
/// # Example
///
/// ```ignore
/// use footballapi::{Country, CountriesQuery, Fetch, FootballClient, Subscription};
///
/// let client = FootballClient::from_env(Subscription::ApiSports)?;
///
/// // Without parameters
/// let all = Country::fetch(&client, None).await?;
///
/// // With parameters
/// let query = CountriesQuery { code: Some("FR".to_string()), ..Default::default() };
/// let france = Country::fetch(&client, Some(&query)).await?;
/// ```
#[async_trait]
pub trait Fetch: Sized + Send {
    /// Endpoint path, e.g. `/countries`.
    const PATH: &'static str;

    /// Caller-facing parameters for this endpoint.
    type Query: Sync;

    /// Fetch the records matching `query`.
    ///
    /// # Arguments
    ///
    /// * `client` - The API-Football client
    /// * `query` - Optional filters; `None` sends no query string at all
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request fails, the API
    /// reports an error or the payload does not match this record type.
    async fn fetch(client: &FootballClient, query: Option<&Self::Query>)
        -> Result<ApiResponse<Self>>;
}
