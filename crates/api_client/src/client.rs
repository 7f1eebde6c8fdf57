//! The API client
//!
//! One `ApiClient` owns the transport, the token store, and the session
//! state. Every operation goes through [`ApiClient::execute`], which is
//! where the cross-cutting contract lives:
//!
//! - protected calls fail fast with `Unauthorized` when the session is
//!   anonymous, without touching the network;
//! - a 401 on a protected call clears the stored token and flips the
//!   session to anonymous before the error is returned;
//! - public calls (login, register, email verification) map a 401 like
//!   any other rejection so the server's message survives to the screen;
//! - every request is logged with method, path, status, and elapsed time;
//! - nothing is retried.

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::envelope;
use crate::error::ApiError;
use crate::session::{FileTokenStore, Session, TokenStore};
use crate::transport::{ApiRequest, HttpTransport, Method, Transport};

/// Whether an operation requires an authenticated session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthMode {
    /// Bearer token required; absence fails fast
    Required,
    /// No token attached (auth endpoints)
    Public,
}

/// Typed client for the invoicing API
pub struct ApiClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    store: Arc<dyn TokenStore>,
    session: RwLock<Session>,
}

impl ApiClient {
    /// Creates a client with the production transport and file token store
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        let store = Arc::new(FileTokenStore::new(&config.token_path));
        Ok(Self::with_parts(config, transport, store))
    }

    /// Creates a client from explicit parts, resuming any stored session
    pub fn with_parts(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        store: Arc<dyn TokenStore>,
    ) -> Self {
        let session = match store.load() {
            Some(token) => Session::authenticated(token),
            None => Session::Anonymous,
        };
        Self {
            config,
            transport,
            store,
            session: RwLock::new(session),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Current session state
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    /// Discards the session locally: clears the stored token and returns
    /// to anonymous. No server call is involved.
    pub async fn logout(&self) {
        self.expire_session().await;
    }

    /// Persists a freshly issued token and transitions to authenticated
    pub(crate) async fn establish_session(&self, token: &str) -> Result<Session, ApiError> {
        self.store
            .save(token)
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        let session = Session::authenticated(token);
        *self.session.write().await = session.clone();
        Ok(session)
    }

    /// Clears the stored token and transitions to anonymous
    pub(crate) async fn expire_session(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear stored token");
        }
        *self.session.write().await = Session::Anonymous;
    }

    /// Issues one request and applies the cross-cutting contract
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
        auth: AuthMode,
    ) -> Result<Value, ApiError> {
        let bearer = match auth {
            AuthMode::Public => None,
            AuthMode::Required => {
                let session = self.session.read().await;
                match session.token() {
                    Some(token) => Some(token.expose().to_string()),
                    None => return Err(ApiError::Unauthorized),
                }
            }
        };

        let mut request = ApiRequest::new(method, path);
        request.query = query;
        request.body = body;
        request.bearer = bearer;

        let started = Instant::now();
        let response = self.transport.execute(request).await?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        info!(
            method = %method,
            path,
            status = response.status,
            elapsed_ms,
            "api request"
        );

        if response.status == 401 && auth == AuthMode::Required {
            self.expire_session().await;
            return Err(ApiError::Unauthorized);
        }

        if !response.is_success() {
            let message = envelope::message(&response.body)
                .unwrap_or_else(|| format!("Request failed with status {}", response.status));
            return Err(ApiError::Server {
                status: response.status,
                message,
            });
        }

        Ok(response.body)
    }

    pub(crate) async fn get(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<Value, ApiError> {
        self.execute(Method::Get, path, query, None, AuthMode::Required)
            .await
    }

    pub(crate) async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.execute(Method::Post, path, Vec::new(), Some(body), AuthMode::Required)
            .await
    }

    pub(crate) async fn post_public<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.execute(Method::Post, path, Vec::new(), Some(body), AuthMode::Public)
            .await
    }

    pub(crate) async fn get_public(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(Method::Get, path, Vec::new(), None, AuthMode::Public)
            .await
    }

    pub(crate) async fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.execute(
            Method::Patch,
            path,
            Vec::new(),
            Some(body),
            AuthMode::Required,
        )
        .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(Method::Delete, path, Vec::new(), None, AuthMode::Required)
            .await
    }
}
