//! Shared setup for router tests: a config that never touches the network,
//! a recording transport and small request helpers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use campos::{
    AppState, Config,
    config::{ContactConfig, LoggingConfig, ServerConfig, SiteConfig},
};
use campos_contact::{ContactPayload, Transport, TransportError};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        contact: ContactConfig {
            endpoint: "http://127.0.0.1:9/contact".to_string(),
            timeout_secs: 1,
        },
        site: SiteConfig::default(),
        logging: LoggingConfig::default(),
    }
}

/// Answers every call with one status and keeps the JSON it was given.
pub struct StubTransport {
    status: u16,
    calls: Mutex<Vec<String>>,
}

impl StubTransport {
    pub fn new(status: u16) -> Arc<Self> {
        Arc::new(Self {
            status,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn post_json(&self, payload: &ContactPayload<'_>) -> Result<(), TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push(serde_json::to_string(payload).unwrap());

        match self.status {
            200..=299 => Ok(()),
            status => Err(TransportError::Status(status)),
        }
    }
}

pub fn app(transport: Arc<StubTransport>) -> Router {
    campos::server::app(AppState {
        config: test_config(),
        transport,
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub fn form_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}

pub async fn post_form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
    send(app, form_request(uri, fields)).await
}
