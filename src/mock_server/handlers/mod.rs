//! HTTP request handlers for the mock server.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use crate::mock_server::fixtures::Fixtures;
use crate::mock_server::state::{route_key, MockState};
use crate::Subscription;

const MISSING_KEY: &str = "Error/Missing application key. Go to https://www.api-football.com/documentation-v3 to learn how to get your API application key.";

/// GET /health
pub async fn health_check() -> &'static str {
    "ok"
}

/// Any other route: answer from the canned responses.
///
/// - wrong or missing key: 200 envelope with a `token` error, as the API does
/// - known path, unknown query: 200 envelope with no results
/// - unknown path: 404 with a `message` payload
pub async fn serve(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let path = uri.path();
    let pairs: Vec<(String, String)> = uri
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();
    let key = route_key(path, pairs.iter().map(|(k, v)| (k, v)));
    let borrowed: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    let get = path.trim_matches('/');

    let mut state = state.write().await;
    state.requests.push(key.clone());

    if let Some(required) = state.required_key.as_deref() {
        if !has_key(&headers, required) {
            let body = Fixtures::error_envelope(get, &borrowed, &[("token", MISSING_KEY)]);
            return (StatusCode::OK, Json(body)).into_response();
        }
    }

    if let Some(canned) = state.lookup(&key) {
        let status = StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, Json(canned.body.clone())).into_response();
    }

    if state.knows_path(path) {
        let body = Fixtures::envelope(get, &borrowed, Vec::new());
        return (StatusCode::OK, Json(body)).into_response();
    }

    (
        StatusCode::NOT_FOUND,
        Json(Fixtures::error_message(&format!(
            "Endpoint '{path}' does not exist"
        ))),
    )
        .into_response()
}

fn has_key(headers: &HeaderMap, required: &str) -> bool {
    [Subscription::ApiSports, Subscription::RapidApi]
        .into_iter()
        .filter_map(|s| headers.get(s.api_key_header()))
        .any(|value| value.as_bytes() == required.as_bytes())
}
