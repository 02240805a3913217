// Shared helpers for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::{Json, State},
    http::{header::CONTENT_TYPE, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chat_relay::api::handlers::AppState;
use chat_relay::api::routes;
use chat_relay::errors::ProviderError;
use chat_relay::llm::providers::LlmProvider;
use chat_relay::llm::{LlmClient, UpstreamRequest, UpstreamResponse};
use http_body_util::BodyExt;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// What the fake provider does when called
#[derive(Debug, Clone)]
pub enum FakeReply {
    Text(String, Option<String>),
    ApiError(u16, String),
    Panic(String),
}

/// In-process provider that records every call it receives
#[derive(Debug)]
pub struct FakeProvider {
    pub calls: Arc<Mutex<Vec<UpstreamRequest>>>,
    reply: FakeReply,
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn generate(
        &self,
        request: &UpstreamRequest,
    ) -> Result<UpstreamResponse, ProviderError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.reply {
            FakeReply::Text(text, conversation_id) => Ok(UpstreamResponse {
                text: text.clone(),
                conversation_id: conversation_id.clone(),
            }),
            FakeReply::ApiError(status, message) => Err(ProviderError::Api {
                status: reqwest::StatusCode::from_u16(*status).unwrap(),
                message: message.clone(),
            }),
            FakeReply::Panic(message) => panic!("{}", message),
        }
    }
}

/// Builds the relay router around a fake provider
pub fn fake_app(reply: FakeReply) -> (Router, Arc<Mutex<Vec<UpstreamRequest>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let provider = FakeProvider {
        calls: calls.clone(),
        reply,
    };
    let state = AppState::new(LlmClient::with_provider(Box::new(provider)));
    (routes::app(state), calls)
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Recorded traffic of the mock upstream
#[derive(Clone, Default)]
pub struct MockUpstreamLog {
    pub bodies: Arc<Mutex<Vec<Value>>>,
    pub auth_headers: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
struct MockUpstreamState {
    log: MockUpstreamLog,
    status: StatusCode,
    reply: Value,
}

async fn mock_responses(
    State(state): State<MockUpstreamState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.log.bodies.lock().unwrap().push(body);
    if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
        state.log.auth_headers.lock().unwrap().push(auth.to_string());
    }
    (state.status, axum::Json(state.reply.clone())).into_response()
}

/// Starts a mock OpenAI responses endpoint on an ephemeral port.
///
/// Returns the base URL (ending in `/v1`) and the traffic log.
pub async fn spawn_mock_upstream(status: StatusCode, reply: Value) -> (String, MockUpstreamLog) {
    let log = MockUpstreamLog::default();
    let state = MockUpstreamState {
        log: log.clone(),
        status,
        reply,
    };
    let app = Router::new()
        .route("/v1/responses", post(mock_responses))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/v1", addr), log)
}

/// Starts a mock responses endpoint that answers every call with a fixed
/// plain-text body.
pub async fn spawn_raw_upstream(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route(
        "/v1/responses",
        post(move || async move { (status, [(CONTENT_TYPE, "text/plain")], body) }),
    );

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/v1", addr)
}
