#![allow(dead_code, clippy::unwrap_used)]
//! Stub HTTP server standing in for the chat completion and transcription APIs.

use axum::Router;
use axum::body::Bytes;
use axum::extract::{OriginalUri, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use std::sync::{Arc, Mutex};

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const TRANSCRIPTIONS_PATH: &str = "/v1/audio/transcriptions";

/// A request as the stub received it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// One canned response served for a path.
pub struct Route {
    path: &'static str,
    status: u16,
    body: String,
}

pub fn route(path: &'static str, status: u16, body: impl Into<String>) -> Route {
    Route {
        path,
        status,
        body: body.into(),
    }
}

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    runtime: Option<tokio::runtime::Runtime>,
}

impl StubServer {
    /// Serves `routes` on the current tokio runtime.
    pub async fn spawn(routes: Vec<Route>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));

        let mut app = Router::new();
        for route in routes {
            let reply = Reply {
                status: StatusCode::from_u16(route.status).unwrap(),
                body: route.body,
                requests: Arc::clone(&requests),
            };
            app = app.route(route.path, post(respond).with_state(reply));
        }

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            runtime: None,
        }
    }

    /// Same as [`StubServer::spawn`] but owns its runtime, for blocking tests.
    pub fn start(routes: Vec<Route>) -> Self {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut server = runtime.block_on(Self::spawn(routes));
        server.runtime = Some(runtime);
        server
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<CapturedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

async fn respond(
    State(reply): State<Reply>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header_value = |name| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    reply.requests.lock().unwrap().push(CapturedRequest {
        path: uri.path().to_string(),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: body.to_vec(),
    });

    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

/// A chat completion body whose first choice says `content`.
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

/// A transcription body carrying `text`.
pub fn transcription_body(text: &str) -> String {
    serde_json::json!({ "text": text }).to_string()
}
