//! End-to-end probes against a local mock server.

use std::time::{Duration, Instant};

use crabiprobe::config::{TesterConfig, ValidatorConfig};
use crabiprobe::probe::{ApiRequest, run_api_request, run_key_validation};
use crabiprobe::session::ValidatorSession;
use crabiprobe::{FailureKind, Outcome};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WEATHER_PATH: &str = "/data/2.5/weather";

fn validator_config(server: &MockServer) -> ValidatorConfig {
    ValidatorConfig {
        probe_url: format!("{}{WEATHER_PATH}?q=NonExistentCity123", server.uri()),
        ..ValidatorConfig::default()
    }
}

fn detail(outcome: &Outcome) -> &str {
    match outcome {
        Outcome::Success { body } => body,
        Outcome::Failure { detail, .. } => detail,
    }
}

#[tokio::test]
async fn validator_accepts_key_when_city_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("q", "NonExistentCity123"))
        .and(query_param("appid", "good-key"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"cod": "404", "message": "city not found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let outcome = run_key_validation(" good-key ", &validator_config(&server)).await;

    assert!(outcome.is_success(), "{outcome:?}");
    assert!(detail(&outcome).contains("Test city not found as expected"));
}

#[tokio::test]
async fn validator_reports_invalid_key_on_401() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "cod": 401,
            "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."
        })))
        .mount(&server)
        .await;

    let outcome = run_key_validation("bad-key", &validator_config(&server)).await;

    assert_eq!(outcome.failure_kind(), Some(FailureKind::InvalidKey));
}

#[tokio::test]
async fn validator_flags_html_body_as_non_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>error</html>"))
        .mount(&server)
        .await;

    let outcome = run_key_validation("some-key", &validator_config(&server)).await;

    assert_eq!(outcome.failure_kind(), Some(FailureKind::NonJson));
    assert!(detail(&outcome).contains("<html>error</html>"));
}

#[tokio::test]
async fn tester_injects_key_and_pretty_prints_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jokes/random"))
        .and(query_param("category", "dev"))
        .and(query_param("appid", "k-123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"abc","value":"joke"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::new(
        format!("{}/jokes/random?category=dev&appid=stale", server.uri()),
        "k-123",
        "appid",
    );
    let outcome = run_api_request(&request, TesterConfig::default().timeout).await;

    assert_eq!(
        outcome,
        Outcome::success("{\n  \"id\": \"abc\",\n  \"value\": \"joke\"\n}")
    );
}

#[tokio::test]
async fn tester_without_key_sends_url_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2])))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::new(format!("{}/items", server.uri()), "", "appid");
    let outcome = run_api_request(&request, TesterConfig::default().timeout).await;

    assert!(outcome.is_success(), "{outcome:?}");
    let received = server.received_requests().await.unwrap_or_default();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.query(), None);
}

#[tokio::test]
async fn tester_flags_html_body_as_non_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>error</html>"))
        .mount(&server)
        .await;

    let url = format!("{}/page", server.uri());
    let request = ApiRequest::new(url.clone(), "", "");
    let outcome = run_api_request(&request, TesterConfig::default().timeout).await;

    assert_eq!(outcome.failure_kind(), Some(FailureKind::NonJson));
    let text = detail(&outcome);
    assert!(text.contains("<html>error</html>"));
    assert!(text.contains(&format!("Attempted URL: {url}")));
}

#[tokio::test]
async fn tester_treats_server_error_as_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"error": "down"})))
        .mount(&server)
        .await;

    let request = ApiRequest::new(format!("{}/status", server.uri()), "", "");
    let outcome = run_api_request(&request, TesterConfig::default().timeout).await;

    assert_eq!(outcome.failure_kind(), Some(FailureKind::Network));
    assert!(detail(&outcome).contains("503"));
}

#[tokio::test]
async fn tester_follows_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", format!("{}/new", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"moved": true})))
        .mount(&server)
        .await;

    let request = ApiRequest::new(format!("{}/old", server.uri()), "", "");
    let outcome = run_api_request(&request, TesterConfig::default().timeout).await;

    assert_eq!(outcome, Outcome::success("{\n  \"moved\": true\n}"));
}

#[tokio::test]
async fn unresponsive_endpoint_times_out_as_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"late": true}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let timeout = Duration::from_millis(300);
    let request = ApiRequest::new(format!("{}/slow", server.uri()), "", "");
    let started = Instant::now();
    let outcome = run_api_request(&request, timeout).await;

    assert_eq!(outcome.failure_kind(), Some(FailureKind::Network));
    assert!(detail(&outcome).contains("timed out"), "{outcome:?}");
    assert!(started.elapsed() >= timeout);
    assert!(started.elapsed() < Duration::from_secs(5), "request hung past its timeout");

    let config = ValidatorConfig {
        timeout,
        ..validator_config(&server)
    };
    let outcome = run_key_validation("k", &config).await;
    assert_eq!(outcome.failure_kind(), Some(FailureKind::Network));
    assert!(detail(&outcome).contains("timed out"), "{outcome:?}");
}

#[tokio::test]
async fn refused_connection_is_network_failure() {
    // Bind and drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .map(|a| a.port())
        .unwrap();
    let request = ApiRequest::new(format!("http://127.0.0.1:{port}/"), "k", "appid");
    let outcome = run_api_request(&request, TesterConfig::default().timeout).await;

    assert_eq!(outcome.failure_kind(), Some(FailureKind::Network));
    let text = detail(&outcome);
    assert!(text.to_lowercase().contains("connection refused"), "{text}");
    let url = format!("http://127.0.0.1:{port}/?appid=k");
    assert_eq!(text.matches(&url).count(), 1, "{text}");
    assert!(text.contains(&format!("Attempted URL: {url}")));
}

#[tokio::test]
async fn unresolvable_host_is_network_failure_naming_dns() {
    let request = ApiRequest::new("http://nonexistent.invalid/", "", "");
    let outcome = run_api_request(&request, TesterConfig::default().timeout).await;

    assert_eq!(outcome.failure_kind(), Some(FailureKind::Network));
    let text = detail(&outcome);
    assert!(text.to_lowercase().contains("dns"), "{text}");
    assert_eq!(text.matches("nonexistent.invalid").count(), 1, "{text}");
}

#[tokio::test]
async fn clearing_after_successful_validation_forgets_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Nowhere"})))
        .mount(&server)
        .await;

    let mut session = ValidatorSession::default();
    let outcome = run_key_validation("live-key", &validator_config(&server)).await;
    session.record("live-key", outcome.is_success());
    assert_eq!(session.valid_key(), Some("live-key"));

    session.clear();
    assert_eq!(session.valid_key(), None);
}
