//! Shared utilities for the endpoint tests: a local stand-in for api.github.com
//! and helpers to drive the relay router in-process.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use projects_github_info::{
    config::{Config, DEFAULT_USER_AGENT},
    router,
    state::AppState,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn start_mock_github(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn relay(github_api_url: &str, token: Option<&str>) -> Router {
    let config = Config {
        github_token: token.map(str::to_string),
        github_api_url: github_api_url.to_string(),
        user_agent: DEFAULT_USER_AGENT.to_string(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
    };
    let http = reqwest::Client::builder().no_proxy().build().unwrap();

    router::app(AppState::with_client(config, http))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub fn json(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
    pub body: Option<Value>,
}

/// Collects what the mock upstream saw.
#[derive(Clone, Default)]
pub struct Recorder {
    inner: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl Recorder {
    pub fn record(&self, headers: &HeaderMap, body: Option<Value>) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        self.inner.lock().unwrap().push(RecordedRequest {
            authorization: header("authorization"),
            user_agent: header("user-agent"),
            body,
        });
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().clone()
    }
}
