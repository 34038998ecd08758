//! Mock API-Football server for E2E testing.
//!
//! This module provides an in-process server that answers like the
//! API-Football v3 API from canned envelopes, keyed by path and sorted query.
//! Unlike wiremock, which mocks at the HTTP level per test, the server ships a
//! default scenario covering every endpoint and is usable from the CLI tests.
//!
//! # Example
//!
//! ```ignore
//! use footballapi::mock_server::{MockServer, MOCK_API_KEY};
//! use footballapi::{ClientConfig, Country, Fetch, FootballClient, Subscription};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let config = ClientConfig::new(Subscription::ApiSports, MOCK_API_KEY)
//!         .with_base_url(server.url());
//!     let client = FootballClient::new(config).unwrap();
//!
//!     let countries = Country::fetch(&client, None).await.unwrap();
//!     assert_eq!(countries.len(), 164);
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{CannedRoute, DefaultScenario, Fixtures, COUNTRY_COUNT};
pub use server::{MockServer, MOCK_API_KEY};
pub use state::{route_key, CannedResponse, MockState};
