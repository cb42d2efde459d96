//! Shared helpers for tests against a `wiremock` server.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::CrystalPay;
use crate::transport::RequestExecutor;

pub fn mock_client(mock_server: &MockServer) -> CrystalPay {
    CrystalPay::new("login", "secret")
        .with_base_url(&mock_server.uri())
        .unwrap()
}

pub fn mock_executor(mock_server: &MockServer) -> RequestExecutor {
    mock_client(mock_server).executor().clone()
}

/// Mounts a successful reply on `POST /<endpoint>/`, merging `fields` into the envelope.
pub async fn respond_ok(mock_server: &MockServer, endpoint: &str, fields: Value) {
    let mut body = json!({ "error": false, "errors": [] });
    if let (Some(body), Value::Object(fields)) = (body.as_object_mut(), fields) {
        body.extend(fields);
    }
    Mock::given(method("POST"))
        .and(path(format!("/{endpoint}/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

/// JSON body of the most recent request the server received.
pub async fn last_request_body(mock_server: &MockServer) -> Value {
    let requests = mock_server.received_requests().await.unwrap();
    requests.last().unwrap().body_json().unwrap()
}

/// Keys of the most recent request body, sorted.
pub async fn last_request_fields(mock_server: &MockServer) -> Vec<String> {
    let body = last_request_body(mock_server).await;
    let mut fields: Vec<String> = body.as_object().unwrap().keys().cloned().collect();
    fields.sort();
    fields
}

pub fn sorted(fields: &[&str]) -> Vec<String> {
    let mut fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
    fields.sort();
    fields
}
