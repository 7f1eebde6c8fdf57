//! Canned transport for exercising the API client without a server
//!
//! Register responses per method+path, hand the transport to
//! `ApiClient::with_parts`, and every operation runs end to end through
//! the real session, gating, and normalization code. Requests are
//! recorded for assertions.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use api_client::{ApiError, ApiRequest, ApiResponse, Method, Transport};

type RouteKey = (Method, String);

/// A scripted [`Transport`] implementation
#[derive(Default)]
pub struct StubTransport {
    routes: Mutex<HashMap<RouteKey, Vec<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a response for `method path`; registering the same route
    /// again queues responses in order, with the last one repeating
    pub fn on(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        self.routes
            .lock()
            .expect("route lock poisoned")
            .entry((method, path.to_string()))
            .or_default()
            .push(ApiResponse { status, body });
        self
    }

    /// All requests seen so far, in order
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("request lock poisoned").clone()
    }

    /// Number of calls made to `method path`
    pub fn calls_to(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// The last request seen on `method path`, if any
    pub fn last_request_to(&self, method: Method, path: &str) -> Option<ApiRequest> {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests
            .lock()
            .expect("request lock poisoned")
            .push(request.clone());

        let mut routes = self.routes.lock().expect("route lock poisoned");
        let key = (request.method, request.path.clone());
        match routes.get_mut(&key) {
            Some(responses) if !responses.is_empty() => {
                if responses.len() > 1 {
                    Ok(responses.remove(0))
                } else {
                    Ok(responses[0].clone())
                }
            }
            _ => Err(ApiError::Transport(format!(
                "no stubbed response for {} {}",
                request.method, request.path
            ))),
        }
    }
}
