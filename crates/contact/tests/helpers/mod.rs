#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use campos_contact::{ContactPayload, ContactSubmission, Transport, TransportError};

#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Status(u16),
    Fault,
}

/// Transport double that records every JSON body it is asked to post.
#[derive(Clone)]
pub struct StubTransport {
    replies: Arc<Mutex<Vec<Reply>>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl StubTransport {
    /// Replies are consumed in order; the last one repeats.
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies)),
            calls: Arc::default(),
        }
    }

    pub fn ok() -> Self {
        Self::new(vec![Reply::Status(200)])
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self) -> Reply {
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.remove(0)
        } else {
            replies[0]
        }
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn post_json(&self, payload: &ContactPayload<'_>) -> Result<(), TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push(serde_json::to_string(payload).unwrap());

        match self.next_reply() {
            Reply::Status(code) if (200..300).contains(&code) => Ok(()),
            Reply::Status(code) => Err(TransportError::Status(code)),
            Reply::Fault => Err(anyhow::anyhow!("connection reset by peer").into()),
        }
    }
}

pub fn jane() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        ..Default::default()
    }
}

#[derive(Debug, Clone)]
pub struct Received {
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct EndpointState {
    status: StatusCode,
    delay: Duration,
    received: Arc<Mutex<Vec<Received>>>,
}

/// Starts a local contact endpoint answering every POST with `status`.
pub async fn spawn_endpoint(status: StatusCode) -> (SocketAddr, Arc<Mutex<Vec<Received>>>) {
    spawn_slow_endpoint(status, Duration::ZERO).await
}

/// Like [`spawn_endpoint`], but each answer is held back for `delay`.
pub async fn spawn_slow_endpoint(
    status: StatusCode,
    delay: Duration,
) -> (SocketAddr, Arc<Mutex<Vec<Received>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = EndpointState {
        status,
        delay,
        received: received.clone(),
    };

    let app = Router::new()
        .route("/contact", post(receive))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, received)
}

async fn receive(State(state): State<EndpointState>, headers: HeaderMap, body: Bytes) -> StatusCode {
    state.received.lock().unwrap().push(Received {
        content_type: headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body: String::from_utf8(body.to_vec()).unwrap(),
    });

    tokio::time::sleep(state.delay).await;

    state.status
}
