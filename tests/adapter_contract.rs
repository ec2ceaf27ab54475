//! Hermetic contract tests for the adapter and assertion helpers.
//!
//! Here wiremock stands in for `/endpoint` itself, so these run under a
//! plain `cargo test` with no deployed application. They pin down the
//! exact wire shape the adapter emits (method, path, headers, form body)
//! and that responses come back unmodified, which is what the live
//! scenarios depend on.

use endpoint_e2e::api_client::API_KEY_HEADER;
use endpoint_e2e::verify::{verify_response, verify_result_field};
use endpoint_e2e::{Action, ApiClient};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "qazWSXedc";
const TOKEN: &str = "A1B2C3D4E5F678901234567890ABCDEF";

/// Register a stub matching the full documented request shape for one
/// action, replying with a canned status and body.
async fn endpoint_stub(server: &MockServer, action: &str, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path("/endpoint"))
        .and(header(API_KEY_HEADER, API_KEY))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string(format!("token={TOKEN}&action={action}")))
        .respond_with(ResponseTemplate::new(status).set_body_string(body.to_string()))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_request_matches_documented_wire_shape() {
    let server = MockServer::start().await;
    endpoint_stub(&server, "LOGIN", 200, r#"{"result":"OK"}"#).await;

    let client = ApiClient::new(&server.uri(), Some(API_KEY.into()));
    let resp = client.send_request(TOKEN, Action::Login).await.unwrap();

    verify_response(resp, 200, "OK").await;
}

#[tokio::test]
async fn action_and_logout_use_their_wire_names() {
    let server = MockServer::start().await;
    endpoint_stub(&server, "ACTION", 200, r#"{"result":"OK"}"#).await;
    endpoint_stub(&server, "LOGOUT", 200, r#"{"result":"OK"}"#).await;

    let client = ApiClient::new(&server.uri(), Some(API_KEY.into()));

    let action = client.send_request(TOKEN, Action::Action).await.unwrap();
    verify_result_field(action, "OK").await;

    let logout = client.send_request(TOKEN, Action::Logout).await.unwrap();
    verify_result_field(logout, "OK").await;
}

#[tokio::test]
async fn error_envelope_passes_through_with_its_status() {
    let server = MockServer::start().await;
    endpoint_stub(&server, "ACTION", 200, r#"{"result":"ERROR"}"#).await;

    let client = ApiClient::new(&server.uri(), Some(API_KEY.into()));
    let resp = client.send_request(TOKEN, Action::Action).await.unwrap();

    verify_response(resp, 200, "ERROR").await;
}

#[tokio::test]
async fn server_failure_status_is_not_translated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/endpoint"))
        .respond_with(ResponseTemplate::new(500).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri(), Some(API_KEY.into()));
    let resp = client.send_request(TOKEN, Action::Login).await.unwrap();

    // The adapter does no status mapping; the 500 reaches the caller as-is.
    assert_eq!(resp.status().as_u16(), 500);
}

#[tokio::test]
async fn missing_api_key_yields_401_from_a_key_checking_endpoint() {
    let server = MockServer::start().await;

    // Keyed requests would match this stub; the anonymous one falls through
    // to the lower-priority 401, mirroring the application's key check.
    Mock::given(method("POST"))
        .and(path("/endpoint"))
        .and(header(API_KEY_HEADER, API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result":"OK"}"#))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/endpoint"))
        .respond_with(ResponseTemplate::new(401))
        .with_priority(250)
        .mount(&server)
        .await;

    let anonymous = ApiClient::new(&server.uri(), None);
    let resp = anonymous.send_request(TOKEN, Action::Login).await.unwrap();

    assert_eq!(resp.status().as_u16(), 401);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0].headers.get(API_KEY_HEADER).is_none(),
        "anonymous adapter sent an X-Api-Key header"
    );
}
