//! Mock server state management.
//!
//! Holds the canned answers of the mock API-Football server, keyed by
//! endpoint path and query.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use super::fixtures::Fixtures;

/// A status code and JSON body to answer with.
#[derive(Debug, Clone, PartialEq)]
pub struct CannedResponse {
    pub status: u16,
    pub body: Value,
}

/// Shared state for the mock server.
///
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Answers indexed by [`route_key`].
    pub responses: HashMap<String, CannedResponse>,

    /// Optional API key. If set, requests must carry it in one of the
    /// credential headers.
    pub required_key: Option<String>,

    /// Route keys of every request served, in arrival order.
    pub requests: Vec<String>,
}

/// Build the lookup key for a path and query pairs.
///
/// Pairs are sorted so that parameter order does not matter.
pub fn route_key<K, V>(path: &str, query: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: Vec<String> = query
        .into_iter()
        .map(|(k, v)| format!("{}={}", k.as_ref(), v.as_ref()))
        .collect();
    pairs.sort();

    let path = format!("/{}", path.trim_matches('/'));
    if pairs.is_empty() {
        path
    } else {
        format!("{path}?{}", pairs.join("&"))
    }
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Answer `path?query` with an arbitrary status and body.
    pub fn with_response(mut self, path: &str, query: &[(&str, &str)], status: u16, body: Value) -> Self {
        self.insert(path, query, CannedResponse { status, body });
        self
    }

    /// Answer `path?query` with a successful envelope around `records`.
    pub fn with_records<T: Serialize>(self, path: &str, query: &[(&str, &str)], records: &[T]) -> Self {
        let response = records
            .iter()
            .map(|r| serde_json::to_value(r).expect("mock records serialize to JSON"))
            .collect();
        let get = path.trim_matches('/');
        self.with_response(path, query, 200, Fixtures::envelope(get, query, response))
    }

    /// Answer `path?query` with a 200 envelope carrying an `errors` map.
    pub fn with_envelope_errors(self, path: &str, query: &[(&str, &str)], errors: &[(&str, &str)]) -> Self {
        let get = path.trim_matches('/');
        self.with_response(path, query, 200, Fixtures::error_envelope(get, query, errors))
    }

    /// Set the required API key.
    pub fn with_required_key(mut self, key: &str) -> Self {
        self.required_key = Some(key.to_string());
        self
    }

    /// Register an answer.
    pub fn insert(&mut self, path: &str, query: &[(&str, &str)], response: CannedResponse) {
        self.responses
            .insert(route_key(path, query.iter().copied()), response);
    }

    /// Look up the answer for a route key.
    pub fn lookup(&self, key: &str) -> Option<&CannedResponse> {
        self.responses.get(key)
    }

    /// Whether any answer is registered for `path`, whatever the query.
    pub fn knows_path(&self, path: &str) -> bool {
        let path = format!("/{}", path.trim_matches('/'));
        self.responses
            .keys()
            .any(|key| key.split('?').next() == Some(path.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_route_key_sorts_pairs() {
        let a = route_key("/fixtures", [("team", "33"), ("season", "2021")]);
        let b = route_key("fixtures/", [("season", "2021"), ("team", "33")]);
        assert_eq!(a, "/fixtures?season=2021&team=33");
        assert_eq!(a, b);
        assert_eq!(route_key("/countries", Vec::<(&str, &str)>::new()), "/countries");
    }

    #[test]
    fn test_state_add_and_lookup() {
        let state = MockState::new().with_records(
            "/countries",
            &[("code", "FR")],
            &[Fixtures::country("France", "FR")],
        );

        let canned = state.lookup("/countries?code=FR").unwrap();
        assert_eq!(canned.status, 200);
        assert_eq!(canned.body["results"], 1);
        assert_eq!(canned.body["response"][0]["name"], "France");

        assert!(state.lookup("/countries").is_none());
        assert!(state.knows_path("/countries"));
        assert!(!state.knows_path("/teams"));
    }

    #[test]
    fn test_state_custom_response() {
        let state = MockState::new().with_response(
            "/leagues",
            &[],
            499,
            json!({"message": "Too many requests"}),
        );
        assert_eq!(state.lookup("/leagues").unwrap().status, 499);
    }
}
