//! Execution tests for the countries endpoint.
//!
//! Uses wiremock to stand in for API-Football and drives the real client.

use footballapi::{ClientConfig, CountriesQuery, Country, ErrorKind, Fetch, FootballClient, Subscription};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> FootballClient {
    let config = ClientConfig::new(Subscription::ApiSports, "test-key").with_base_url(server.uri());
    FootballClient::new(config).unwrap()
}

fn countries_envelope(count: usize) -> Value {
    let countries: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "name": format!("Country {i}"),
                "code": format!("{:02}", i % 100),
                "flag": format!("https://media.api-sports.io/flags/{i}.svg")
            })
        })
        .collect();

    json!({
        "get": "countries",
        "parameters": [],
        "errors": [],
        "results": count,
        "paging": {"current": 1, "total": 1},
        "response": countries
    })
}

#[tokio::test]
async fn test_all_countries_without_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/countries"))
        .and(header("x-apisports-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(countries_envelope(164)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let countries = Country::fetch(&client(&mock_server), None).await.unwrap();

    assert_eq!(countries.len(), 164);
    assert_eq!(countries.results(), 164);
    assert_eq!(countries.envelope.get, "countries");
    assert!(countries.envelope.parameters.is_empty());
    assert_eq!(countries.items[0].name, "Country 0");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None, "no query string expected");
}

#[tokio::test]
async fn test_all_absent_query_sends_no_query_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(countries_envelope(3)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let countries = Country::fetch(&client(&mock_server), Some(&CountriesQuery::default()))
        .await
        .unwrap();
    assert_eq!(countries.len(), 3);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_country_by_code() {
    let mock_server = MockServer::start().await;

    let response = json!({
        "get": "countries",
        "parameters": {"code": "FR"},
        "errors": [],
        "results": 1,
        "paging": {"current": 1, "total": 1},
        "response": [
            {"name": "France", "code": "FR", "flag": "https://media.api-sports.io/flags/fr.svg"}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/countries"))
        .and(query_param("code", "FR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = CountriesQuery {
        code: Some("FR".to_string()),
        ..Default::default()
    };
    let countries = Country::fetch(&client(&mock_server), Some(&query)).await.unwrap();

    assert_eq!(countries.len(), 1);
    assert_eq!(countries.items[0].name, "France");
    assert_eq!(countries.envelope.parameters["code"], "FR");
}

#[tokio::test]
async fn test_invalid_query_never_reaches_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(countries_envelope(1)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let query = CountriesQuery {
        name: Some(String::new()),
        code: Some("FRA".to_string()),
        search: Some("fr".to_string()),
    };
    let err = Country::fetch(&client(&mock_server), Some(&query)).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    let fields: Vec<_> = err.as_validation().unwrap().fields().collect();
    assert_eq!(fields, vec!["name", "code", "search"]);
}

#[tokio::test]
async fn test_rapidapi_keeps_base_path_and_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/countries"))
        .and(header("x-rapidapi-key", "rapid-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(countries_envelope(2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(Subscription::RapidApi, "rapid-key")
        .with_base_url(format!("{}/v3", mock_server.uri()));
    let client = FootballClient::new(config).unwrap();

    let countries = Country::fetch(&client, None).await.unwrap();
    assert_eq!(countries.len(), 2);
}
