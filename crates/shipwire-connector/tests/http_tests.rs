/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for the connector request pipeline
[POS]:    Integration tests - HTTP envelope and error handling
[UPDATE]: When envelope handling or error classification changes
*/

mod common;

use common::{connector_for, envelope, setup_mock_server};
use serde_json::json;
use shipwire_connector::{
    ApiRequest, ClientConfig, Connector, Credentials, Envelope, Environment, ShipwireConfig,
    ShipwireError,
};
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_connector_creation() {
    let connector = assert_ok!(Connector::new(
        Credentials::basic("user", "pass"),
        Environment::Live
    ));
    assert_eq!(connector.environment(), Environment::Live);
    assert_eq!(connector.api_version(), "v3");
}

#[test]
fn test_connector_from_config() {
    let config = assert_ok!(ShipwireConfig::from_yaml_str(
        "username: key-abc\nenvironment: sandbox\napi_version: v3.1\n"
    ));
    let connector = assert_ok!(Connector::from_config(&config));
    assert_eq!(connector.environment(), Environment::Sandbox);
    assert_eq!(connector.api_version(), "v3.1");
    assert_eq!(connector.credentials(), &Credentials::api_key("key-abc"));
}

#[test]
fn test_error_helpers() {
    let err = ShipwireError::from_status(400, "Invalid warehouse");
    assert!(!err.is_auth_error());
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_put_and_delete_methods() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/api/v3/returns/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({"id": 8}))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v3/returns/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": 200})))
        .expect(1)
        .mount(&server)
        .await;

    let connector = connector_for(&server);
    let updated: serde_json::Value = assert_ok!(
        connector
            .request_resource(ApiRequest::put("returns/8").with_body("{\"externalId\":\"x\"}"))
            .await
    );
    assert_eq!(updated["id"], 8);

    let deleted: Envelope = assert_ok!(connector.request(ApiRequest::delete("returns/8")).await);
    assert_eq!(deleted.status, 200);
}

#[tokio::test]
async fn test_api_level_error_despite_http_success() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/returns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 400,
            "message": "Invalid offset",
        })))
        .mount(&server)
        .await;

    let err = connector_for(&server)
        .request::<serde_json::Value>(ApiRequest::get("returns").with_param("offset", -1))
        .await
        .unwrap_err();

    match err {
        ShipwireError::Connection { message, status } => {
            assert_eq!(message, "Invalid offset");
            assert_eq!(status, 400);
        }
        other => panic!("Expected Connection error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bad_request_is_request_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/returns"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": 400,
            "message": "Missing originalOrder",
        })))
        .mount(&server)
        .await;

    let err = connector_for(&server)
        .request::<serde_json::Value>(ApiRequest::post("returns").with_body("{}"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ShipwireError::Request { status: 400, ref message } if message == "Missing originalOrder"
    ));
}

#[tokio::test]
async fn test_return_on_error_with_unwrapped_resource() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/returns/2"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": 400,
            "message": "Partially invalid",
            "resource": {"id": 2, "status": "held"},
        })))
        .mount(&server)
        .await;

    let resource: serde_json::Value = assert_ok!(
        connector_for(&server)
            .request_resource(ApiRequest::get("returns/2").return_on_error())
            .await
    );
    assert_eq!(resource["status"], "held");
}

#[tokio::test]
async fn test_warnings_do_not_fail_request() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/returns"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "message": "Successful",
            "resource": {"offset": 0, "total": 0, "items": []},
            "warnings": [{"code": "deprecated", "message": "Use v3.1", "type": "warning"}],
        })))
        .mount(&server)
        .await;

    let envelope: Envelope = assert_ok!(
        connector_for(&server)
            .request(ApiRequest::get("returns").with_param("limit", 1))
            .await
    );
    assert_eq!(envelope.warnings.len(), 1);
    assert_eq!(envelope.warnings[0].to_string(), "deprecated: Use v3.1");
}

#[tokio::test]
async fn test_malformed_success_body_is_serialization_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/returns"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = connector_for(&server)
        .request::<serde_json::Value>(ApiRequest::get("returns"))
        .await
        .unwrap_err();
    assert!(matches!(err, ShipwireError::Serialization(_)));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/returns"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": 200}))
                .set_delay(std::time::Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig {
        timeout: std::time::Duration::from_millis(50),
        ..ClientConfig::default()
    }
    .with_base_url(server.uri());
    let connector = assert_ok!(Connector::with_config(
        Credentials::api_key("key"),
        Environment::Sandbox,
        config
    ));

    let err = connector
        .request::<serde_json::Value>(ApiRequest::get("returns"))
        .await
        .unwrap_err();
    match err {
        ShipwireError::Transport(inner) => assert!(inner.is_timeout()),
        other => panic!("Expected Transport error, got {other:?}"),
    }
}
