/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for shipwire-connector tests

use serde_json::{Value, json};
use shipwire_connector::{ClientConfig, Connector, Credentials, Environment};
use wiremock::MockServer;

pub const TEST_USERNAME: &str = "ops@example.com";
pub const TEST_PASSWORD: &str = "s3cret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Connector with Basic credentials pointed at the mock server
pub fn connector_for(server: &MockServer) -> Connector {
    Connector::with_config(
        Credentials::basic(TEST_USERNAME, TEST_PASSWORD),
        Environment::Sandbox,
        ClientConfig::default().with_base_url(server.uri()),
    )
    .expect("connector init")
}

/// Successful envelope around `resource`
#[allow(dead_code)]
pub fn envelope(resource: Value) -> Value {
    json!({
        "status": 200,
        "message": "Successful",
        "resource": resource,
    })
}

/// Single-page collection of `resources`
#[allow(dead_code)]
pub fn collection(resources: Vec<Value>) -> Value {
    let total = resources.len();
    let items: Vec<Value> = resources
        .into_iter()
        .map(|resource| json!({ "resourceLocation": null, "resource": resource }))
        .collect();
    json!({
        "offset": 0,
        "total": total,
        "previous": null,
        "next": null,
        "items": items,
    })
}
