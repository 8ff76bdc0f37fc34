//! Mock Hugging Face inference backend for integration tests
//!
//! Serves `POST /models/{*model}` and returns either canned image bytes or a
//! canned failure, while recording what the gateway sent.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Image bytes served by default (a PNG signature, good enough for tests)
pub const FAKE_IMAGE: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

/// What the mock returns for every generation request
enum MockReply {
    Bytes(Vec<u8>),
    Failure { status: u16, body: String },
}

struct MockState {
    request_count: AtomicU32,
    reply: MockReply,
    last_model: Mutex<Option<String>>,
    last_payload: Mutex<Option<Value>>,
    last_authorization: Mutex<Option<String>>,
}

/// Mock provider backend that returns predictable responses
pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockProvider {
    /// Start a mock that returns [`FAKE_IMAGE`]
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(MockReply::Bytes(FAKE_IMAGE.to_vec())).await
    }

    /// Start a mock that returns the given image bytes
    pub async fn with_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        Self::start_inner(MockReply::Bytes(bytes.to_vec())).await
    }

    /// Start a mock that fails every request with the given status and body
    pub async fn failing(status: u16, body: &str) -> anyhow::Result<Self> {
        Self::start_inner(MockReply::Failure {
            status,
            body: body.to_owned(),
        })
        .await
    }

    async fn start_inner(reply: MockReply) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            request_count: AtomicU32::new(0),
            reply,
            last_model: Mutex::new(None),
            last_payload: Mutex::new(None),
            last_authorization: Mutex::new(None),
        });

        let app = Router::new()
            .route("/models/{*model}", routing::post(handle_generate))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a provider
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of generation requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Model path segment from the most recent request
    pub fn last_model(&self) -> Option<String> {
        self.state.last_model.lock().unwrap().clone()
    }

    /// JSON payload from the most recent request
    pub fn last_payload(&self) -> Option<Value> {
        self.state.last_payload.lock().unwrap().clone()
    }

    /// Authorization header from the most recent request
    pub fn last_authorization(&self) -> Option<String> {
        self.state.last_authorization.lock().unwrap().clone()
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_generate(
    State(state): State<Arc<MockState>>,
    Path(model): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    *state.last_model.lock().unwrap() = Some(model);
    *state.last_payload.lock().unwrap() = Some(payload);
    *state.last_authorization.lock().unwrap() = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);

    match &state.reply {
        MockReply::Bytes(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "image/png")],
            bytes.clone(),
        )
            .into_response(),
        MockReply::Failure { status, body } => (
            StatusCode::from_u16(*status).expect("valid test status"),
            body.clone(),
        )
            .into_response(),
    }
}
