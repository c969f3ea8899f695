//! Shared fixtures for the HTTP and job tests.
//!
//! `FakeGraphApi` is a real axum server on an ephemeral port standing in for
//! the WhatsApp Cloud API, so `GraphApiClient` is exercised end to end.
//! `RecordingMessenger` skips HTTP entirely for tests that only care about
//! what was sent.
#![allow(dead_code)]

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use quickreserve::db::{AppointmentStore, MemoryAppointmentStore};
use quickreserve::models::{Appointment, AppointmentStatus, OutgoingMessage};
use quickreserve::utils::{GraphApiClient, Messenger};
use quickreserve::{create_router, AppState, Config, SendError};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt;

pub const VERIFY_TOKEN: &str = "quickreserve-verify";
pub const ACCESS_TOKEN: &str = "test-access-token";
pub const ACCOUNT_ID: &str = "109876543210";

// ============================================================================
// Fake Graph API
// ============================================================================

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub account: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct FakeState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    rejected: Arc<HashSet<String>>,
}

pub struct FakeGraphApi {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl FakeGraphApi {
    /// Accepts every message except those addressed to `rejected`, which get 500.
    pub async fn spawn(rejected: &[&str]) -> Self {
        let state = FakeState {
            requests: Arc::new(Mutex::new(Vec::new())),
            rejected: Arc::new(rejected.iter().map(|r| r.to_string()).collect()),
        };
        let requests = state.requests.clone();
        let router = Router::new()
            .route("/{account}/messages", post(fake_messages))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake graph api");
        let addr: SocketAddr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("fake graph api");
        });

        Self {
            url: format!("http://{addr}"),
            requests,
            handle,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn recipients(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter_map(|r| r.body["to"].as_str().map(str::to_string))
            .collect()
    }
}

impl Drop for FakeGraphApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn fake_messages(
    State(state): State<FakeState>,
    Path(account): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let to = body["to"].as_str().unwrap_or_default().to_string();
    let mut requests = state.requests.lock().expect("requests lock");
    requests.push(RecordedRequest {
        account,
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    if state.rejected.contains(&to) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": {"message": "Recipient unavailable", "code": 131026}})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "messaging_product": "whatsapp",
            "contacts": [{"input": to, "wa_id": to}],
            "messages": [{"id": format!("wamid.{}", requests.len())}]
        })),
    )
}

/// Client for a `FakeGraphApi`; bypasses any proxy set in the environment.
pub fn graph_client(graph_api_url: &str) -> GraphApiClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("reqwest client");
    GraphApiClient::with_http_client(http, graph_api_url, ACCOUNT_ID, ACCESS_TOKEN)
}

// ============================================================================
// Recording messenger
// ============================================================================

#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<OutgoingMessage>>,
    failing: HashSet<String>,
}

impl RecordingMessenger {
    pub fn failing_for(recipients: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: recipients.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().expect("sent lock").clone()
    }

    pub fn recipients(&self) -> Vec<String> {
        self.sent().into_iter().map(|m| m.to).collect()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send(&self, message: &OutgoingMessage) -> Result<Option<String>, SendError> {
        self.sent.lock().expect("sent lock").push(message.clone());
        if self.failing.contains(&message.to) {
            return Err(SendError::Rejected {
                status: 400,
                body: "{\"error\":{\"message\":\"Invalid parameter\"}}".to_string(),
            });
        }
        Ok(Some(format!("wamid.{}", message.to)))
    }
}

// ============================================================================
// App wiring
// ============================================================================

pub fn test_config(graph_api_url: &str) -> Config {
    let graph_api_url = graph_api_url.to_string();
    Config::from_lookup(move |key| match key {
        "WHATSAPP_BUSINESS_ACCOUNT_ID" => Some(ACCOUNT_ID.to_string()),
        "WHATSAPP_ACCESS_TOKEN" => Some(ACCESS_TOKEN.to_string()),
        "VERIFY_TOKEN" => Some(VERIFY_TOKEN.to_string()),
        "GRAPH_API_URL" => Some(graph_api_url.clone()),
        _ => None,
    })
    .expect("test config")
}

pub fn test_router(
    store: impl AppointmentStore + 'static,
    messenger: Arc<dyn Messenger>,
    graph_api_url: &str,
) -> Router {
    create_router(Arc::new(AppState {
        config: test_config(graph_api_url),
        store: Arc::new(store),
        messenger,
    }))
}

pub fn appointment(
    phone: Option<&str>,
    name: Option<&str>,
    at: DateTime<Utc>,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        phone: phone.map(str::to_string),
        name: name.map(str::to_string),
        appointment_time: at,
        status,
    }
}

pub fn empty_store() -> MemoryAppointmentStore {
    MemoryAppointmentStore::default()
}

/// Sends one request through the router and returns status and body text.
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("response body")
        .to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

pub fn text_envelope(messages: &[(&str, &str)]) -> Value {
    let messages: Vec<Value> = messages
        .iter()
        .enumerate()
        .map(|(i, (from, body))| {
            json!({
                "from": from,
                "id": format!("wamid.in.{i}"),
                "timestamp": "1733230800",
                "type": "text",
                "text": {"body": body}
            })
        })
        .collect();

    json!({
        "object": "whatsapp_business_account",
        "entry": [{
            "id": ACCOUNT_ID,
            "changes": [{
                "field": "messages",
                "value": {
                    "messaging_product": "whatsapp",
                    "metadata": {"display_phone_number": "27110000000", "phone_number_id": "1234"},
                    "messages": messages
                }
            }]
        }]
    })
}
