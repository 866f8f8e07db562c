//! Shared helpers for integration tests: recording and failing event sinks,
//! a stub workflow client and an in-process mock Langflow server.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::Router;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use langflow_bridge::client::WorkflowClient;
use langflow_bridge::error::{BridgeError, BridgeResult};
use langflow_bridge::events::{AgentEvent, EventSink, PublishError};
use langflow_bridge::models::{Message, Task};
use langflow_bridge::orchestration::RequestContext;
use langflow_bridge::web::{create_app, AppState};

/// Standard Langflow reply with the given text at the primary location
pub fn flow_response(text: &str) -> Value {
    json!({
        "session_id": "session-1",
        "outputs": [{
            "inputs": {"input_value": "ignored"},
            "outputs": [{
                "results": {"message": {"text": text, "sender": "Machine"}},
                "artifacts": {}
            }]
        }]
    })
}

/// Fresh task and request context for a single user message
pub fn request_for(text: &str) -> (Task, RequestContext) {
    let message = Message::user_text(text);
    let task = Task::from_message(&message);
    let context = RequestContext::for_task(&task, message);
    (task, context)
}

/// Event sink that records everything published to it
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<AgentEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AgentEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(AgentEvent::name).collect()
    }
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn publish(&self, event: AgentEvent) -> Result<(), PublishError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

/// Event sink that rejects selected publish attempts and records the rest
#[derive(Debug, Default)]
pub struct FailingSink {
    failing_attempts: Option<HashSet<usize>>,
    attempts: Mutex<usize>,
    accepted: Mutex<Vec<AgentEvent>>,
    rejected: Mutex<Vec<AgentEvent>>,
}

impl FailingSink {
    /// Reject the publish attempts at the given zero-based positions
    pub fn failing_on(attempts: &[usize]) -> Self {
        Self {
            failing_attempts: Some(attempts.iter().copied().collect()),
            ..Self::default()
        }
    }

    /// Reject every publish attempt
    pub fn always() -> Self {
        Self::default()
    }

    pub fn accepted(&self) -> Vec<AgentEvent> {
        self.accepted.lock().unwrap().clone()
    }

    pub fn rejected(&self) -> Vec<AgentEvent> {
        self.rejected.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventSink for FailingSink {
    async fn publish(&self, event: AgentEvent) -> Result<(), PublishError> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            let current = *attempts;
            *attempts += 1;
            current
        };

        let fails = self
            .failing_attempts
            .as_ref()
            .map_or(true, |set| set.contains(&attempt));
        if fails {
            self.rejected.lock().unwrap().push(event);
            return Err(PublishError::Rejected(format!("attempt {attempt} rejected")));
        }
        self.accepted.lock().unwrap().push(event);
        Ok(())
    }
}

/// Canned outcome for the stub workflow client
#[derive(Debug, Clone)]
pub enum StubReply {
    Json(Value),
    HttpStatus(u16, String),
    Internal(String),
}

/// Workflow client returning a canned reply and recording its calls
#[derive(Debug)]
pub struct StubWorkflowClient {
    reply: StubReply,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl StubWorkflowClient {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn answering(text: &str) -> Self {
        Self::new(StubReply::Json(flow_response(text)))
    }

    /// `(input_value, session_id)` of every call, in order
    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorkflowClient for StubWorkflowClient {
    async fn run_flow(&self, input_value: &str, session_id: Option<&str>) -> BridgeResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((input_value.to_string(), session_id.map(str::to_string)));

        match &self.reply {
            StubReply::Json(value) => Ok(value.clone()),
            StubReply::HttpStatus(status, body) => Err(BridgeError::http_status(*status, body)),
            StubReply::Internal(message) => Err(BridgeError::Internal(message.clone())),
        }
    }
}

/// Request observed by the mock Langflow server
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub query: HashMap<String, String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// In-process Langflow stand-in bound to an ephemeral local port
pub struct MockLangflowServer {
    pub url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockLangflowServer {
    /// Serve every request with the given status and raw body
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
            captured: captured.clone(),
        };
        let app = Router::new().fallback(run_flow).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}/api/v1/run/test-flow"),
            captured,
            handle,
        }
    }

    /// Serve every request with `200 OK` and the given JSON
    pub async fn answering(body: Value) -> Self {
        Self::start(200, body.to_string()).await
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

impl Drop for MockLangflowServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run_flow(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    state.captured.lock().unwrap().push(CapturedRequest {
        path: uri.path().to_string(),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        query,
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// Serve the bridge application on an ephemeral port and return its base URL
pub async fn spawn_app(state: Arc<AppState>) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_app(state);
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), handle)
}
