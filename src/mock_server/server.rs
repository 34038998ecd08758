//! Mock API-Football server.
//!
//! Provides an axum-based HTTP server that answers like the API-Football v3
//! API from canned envelopes.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::{CannedResponse, MockState};

/// API key the default state expects.
pub const MOCK_API_KEY: &str = "test-key";

/// A mock API-Football server for testing.
///
/// The server runs in the background and can be used to test the client
/// against realistic envelopes without network access.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// Requests must carry [`MOCK_API_KEY`]. The server listens on a random
    /// available port; use `url()` to get its base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state and no key check.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        tracing::debug!(%addr, "mock API-Football server listening");

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Pass it to `ClientConfig::with_base_url`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows adding answers or inspecting served requests during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        let scenario = Fixtures::default_scenario();
        Self::state_from_scenario(scenario).with_required_key(MOCK_API_KEY)
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new()
            .with_records("/countries", &[], &scenario.countries)
            .with_records("/leagues", &[("id", "39")], &scenario.leagues)
            .with_records("/leagues", &[("id", "39"), ("current", "true")], &scenario.leagues)
            .with_records("/teams", &[("id", "33")], &scenario.teams)
            .with_records(
                "/fixtures",
                &[("team", "33"), ("season", "2021")],
                &scenario.fixtures,
            );

        for route in scenario.extra {
            state.insert(
                route.path,
                &route.query,
                CannedResponse {
                    status: route.status,
                    body: route.body,
                },
            );
        }

        state
    }

    /// Create the axum router: a health check, everything else canned.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            .route("/health", get(handlers::health_check))
            .fallback(handlers::serve)
            .with_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientConfig, Country, ErrorKind, Fetch, FootballClient, Subscription, TeamInformation, TeamsQuery};

    fn client(server: &MockServer, key: &str) -> FootballClient {
        let config = ClientConfig::new(Subscription::ApiSports, key).with_base_url(server.url());
        FootballClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_countries_with_football_client() {
        let server = MockServer::start().await;
        let client = client(&server, MOCK_API_KEY);

        let countries = Country::fetch(&client, None).await.expect("Failed to fetch countries");
        assert_eq!(countries.len(), 164);
        assert_eq!(countries.results(), 164);

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_wrong_key_is_rejected() {
        let server = MockServer::start().await;
        let client = client(&server, "wrong-key");

        let err = Country::fetch(&client, None).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert!(err.to_string().contains("token"));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let server = MockServer::start_empty().await;
        let client = client(&server, MOCK_API_KEY);

        let err = Country::fetch(&client, None).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.status_code(), Some(404));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_custom_state() {
        let state = MockState::new().with_records(
            "/teams",
            &[("id", "42")],
            &[Fixtures::team_information(42, "Arsenal", "England", "Emirates Stadium")],
        );

        let server = MockServer::with_state(state).await;
        let client = client(&server, "any-key");

        let query = TeamsQuery {
            id: Some(42),
            ..Default::default()
        };
        let teams = TeamInformation::fetch(&client, Some(&query))
            .await
            .expect("Failed to fetch teams");

        assert_eq!(teams.items[0].team.name, "Arsenal");
        assert_eq!(server.state().read().await.requests, vec!["/teams?id=42"]);

        server.shutdown().await;
    }
}
