//! Country model and trait implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::FootballClient;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::traits::Fetch;
use crate::validate::{Constraint, FieldCheck, Validate};

/// Endpoint path for countries.
pub const COUNTRIES_PATH: &str = "/countries";

/// A country known to the API.
///
/// The `World` pseudo-country has neither code nor flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Country name, also accepted as a filter by other endpoints.
    pub name: String,
    /// Two-letter code (e.g. "FR", "GB").
    #[serde(default)]
    pub code: Option<String>,
    /// URL of the flag image.
    #[serde(default)]
    pub flag: Option<String>,
}

/// Query parameters for `/countries`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountriesQuery {
    /// Exact country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Partial name, at least 3 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Validate for CountriesQuery {
    fn checks(&self) -> Vec<FieldCheck<'_>> {
        vec![
            FieldCheck::text("name", self.name.as_deref(), Constraint::MinLen(1)),
            FieldCheck::text("code", self.code.as_deref(), Constraint::Len(2)),
            FieldCheck::text("search", self.search.as_deref(), Constraint::MinLen(3)),
        ]
    }
}

#[async_trait]
impl Fetch for Country {
    const PATH: &'static str = COUNTRIES_PATH;
    type Query = CountriesQuery;

    #[tracing::instrument(skip(client))]
    async fn fetch(
        client: &FootballClient,
        query: Option<&CountriesQuery>,
    ) -> Result<ApiResponse<Self>> {
        let envelope = client.get(Self::PATH, query).await?;
        ApiResponse::from_envelope(envelope)
    }
}
