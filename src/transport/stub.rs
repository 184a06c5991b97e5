use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, Request, Url};

use super::client::Transport;
use super::{RawResponse, TransportError};

#[derive(Debug)]
enum Canned {
    Response(RawResponse),
    Fail(String),
}

/// Snapshot of a request that reached a [`StubTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// Deterministic in-memory [`Transport`].
///
/// Routes are keyed by URL path, plus `?query` when the request has one, so
/// the same stub answers regardless of host. Unknown routes answer `404` with
/// an empty body. Every request is recorded before it is answered.
#[derive(Debug, Default)]
pub struct StubTransport {
    routes: HashMap<String, Canned>,
    seen: Mutex<Vec<RecordedRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `route` with `status` and the given raw payload.
    pub fn with_response(mut self, route: &str, status: u16, body: impl Into<Bytes>) -> Self {
        self.routes
            .insert(route.to_string(), Canned::Response(RawResponse::new(status, body)));
        self
    }

    /// Answers `route` with `status` and `value` encoded as JSON.
    pub fn with_json(self, route: &str, status: u16, value: serde_json::Value) -> Self {
        self.with_response(route, status, value.to_string())
    }

    /// Makes `route` fail at the transport level.
    pub fn with_failure(mut self, route: &str, message: &str) -> Self {
        self.routes
            .insert(route.to_string(), Canned::Fail(message.to_string()));
        self
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

fn route_key(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, req: Request) -> Result<RawResponse, TransportError> {
        let key = route_key(req.url());
        let recorded = RecordedRequest {
            method: req.method().clone(),
            url: req.url().clone(),
            headers: req.headers().clone(),
            body: req
                .body()
                .and_then(|b| b.as_bytes())
                .map(Bytes::copy_from_slice),
        };
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(recorded);

        match self.routes.get(&key) {
            Some(Canned::Response(resp)) => Ok(resp.clone()),
            Some(Canned::Fail(message)) => Err(TransportError::Other(message.clone())),
            None => Ok(RawResponse::new(404, Bytes::new())),
        }
    }
}
