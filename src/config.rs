//! Subscription modes and client configuration.

use std::env;
use std::fmt;

use crate::error::{FootballError, Result};

/// Environment variable that overrides the subscription's base URL.
pub const BASE_URL_ENV: &str = "API_FOOTBALL_URL";

/// How the API-Football account was subscribed to.
///
/// Each mode has its own base URL, credential environment variable and
/// credential header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Subscription {
    /// Subscribed directly through API-Sports.
    #[default]
    ApiSports,
    /// Subscribed through RapidAPI.
    RapidApi,
}

impl Subscription {
    /// Default base URL for this mode.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::ApiSports => "https://v3.football.api-sports.io",
            Self::RapidApi => "https://api-football-v1.p.rapidapi.com/v3",
        }
    }

    /// Environment variable holding the API key.
    pub fn api_key_env(self) -> &'static str {
        match self {
            Self::ApiSports => "API_SPORTS_KEY",
            Self::RapidApi => "RAPID_API_KEY",
        }
    }

    /// HTTP header carrying the API key.
    pub fn api_key_header(self) -> &'static str {
        match self {
            Self::ApiSports => "x-apisports-key",
            Self::RapidApi => "x-rapidapi-key",
        }
    }
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiSports => f.write_str("APISports"),
            Self::RapidApi => f.write_str("RapidAPI"),
        }
    }
}

/// Everything a [`FootballClient`](crate::FootballClient) needs, resolved once
/// at construction time.
#[derive(Clone)]
pub struct ClientConfig {
    subscription: Subscription,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("subscription", &self.subscription)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Configuration with an explicit API key and the mode's default base URL.
    pub fn new(subscription: Subscription, api_key: impl Into<String>) -> Self {
        Self {
            subscription,
            base_url: subscription.base_url().to_string(),
            api_key: api_key.into(),
        }
    }

    /// Read the API key from the mode's environment variable.
    ///
    /// `API_FOOTBALL_URL`, when set, replaces the default base URL.
    ///
    /// # Errors
    ///
    /// Returns [`FootballError::ConfigMissing`] if the key variable is unset
    /// or empty.
    pub fn from_env(subscription: Subscription) -> Result<Self> {
        let var = subscription.api_key_env();
        let api_key = env::var(var)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                FootballError::ConfigMissing(format!("{var} environment variable not set"))
            })?;

        let mut config = Self::new(subscription, api_key);
        if let Ok(url) = env::var(BASE_URL_ENV) {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        Ok(config)
    }

    /// Point the client at another base URL (a proxy or a mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn subscription(&self) -> Subscription {
        self.subscription
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}
