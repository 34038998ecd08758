//! Response decoding across HTTP status bands, against a real exchange.

use footballapi::{
    ClientConfig, ErrorKind, Fetch, FootballClient, FootballError, League, Subscription,
    TeamInformation,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> FootballClient {
    let config = ClientConfig::new(Subscription::ApiSports, "test-key").with_base_url(server.uri());
    FootballClient::new(config).unwrap()
}

async fn answering(status: u16, body: serde_json::Value) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/leagues"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test]
async fn test_created_is_decoded() {
    let server = answering(
        201,
        json!({"get": "leagues", "parameters": [], "errors": [], "results": 0,
               "paging": {"current": 1, "total": 1}, "response": []}),
    )
    .await;

    let leagues = League::fetch(&client(&server), None).await.unwrap();
    assert!(leagues.is_empty());
    assert_eq!(leagues.envelope.total_pages(), Some(1));
}

#[tokio::test]
async fn test_not_found_carries_message() {
    let server = answering(404, json!({"message": "Endpoint 'leagues' does not exist"})).await;

    let err = League::fetch(&client(&server), None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status_code(), Some(404));
    match err {
        FootballError::ApiError { message, .. } => {
            assert_eq!(message, "Endpoint 'leagues' does not exist")
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_500_is_api_error() {
    let server = answering(500, json!({"message": "Internal error"})).await;

    let err = League::fetch(&client(&server), None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn test_501_is_unknown_status() {
    let server = answering(501, json!({"message": "Not implemented"})).await;

    let err = League::fetch(&client(&server), None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownStatus);
    assert_eq!(err.to_string(), "unknown http code: 501");
}

#[tokio::test]
async fn test_null_response_is_empty() {
    let server = answering(
        200,
        json!({"get": "leagues", "parameters": [], "errors": [], "results": 0,
               "paging": {}, "response": null}),
    )
    .await;

    let leagues = League::fetch(&client(&server), None).await.unwrap();
    assert!(leagues.is_empty());
    assert_eq!(leagues.envelope.current_page(), None);
}

#[tokio::test]
async fn test_payload_of_wrong_shape_is_decoding_error() {
    let server = answering(
        200,
        json!({"get": "leagues", "parameters": [], "errors": [], "results": 1,
               "paging": {"current": 1, "total": 1}, "response": [{"league": "oops"}]}),
    )
    .await;

    let err = League::fetch(&client(&server), None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decoding);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on port 1.
    let config = ClientConfig::new(Subscription::ApiSports, "test-key").with_base_url("http://127.0.0.1:1");
    let client = FootballClient::new(config).unwrap();

    let err = TeamInformation::fetch(&client, None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}
