//! HTTP Boundary - Typed client for the invoicing API
//!
//! This crate is the only place that touches the wire. It owns:
//!
//! - **Session**: an explicit `Anonymous`/`Authenticated` state backed by
//!   a single persisted bearer token; any 401 on a protected call clears
//!   the token and returns the session to anonymous.
//! - **Envelope normalization**: the backend's response shapes (`data`,
//!   `data.data`, `items`, `data.items`) are normalized once, right after
//!   each call; nothing downstream probes shapes.
//! - **Error taxonomy**: client-side validation, unauthorized, server
//!   rejections with their message verbatim, transport failures with a
//!   generic message. Nothing is retried; errors never propagate past an
//!   operation boundary untyped.
//! - **Operations**: one typed method per endpoint of the contract, with
//!   the invoicing status model gating every mutating invoice action
//!   before a request is issued.
//!
//! # Example
//!
//! ```rust,ignore
//! use api_client::{ApiClient, ClientConfig, LoginRequest};
//!
//! let client = ApiClient::new(ClientConfig::from_env()?)?;
//! client.login(LoginRequest::new(email, password)).await?;
//! let view = client.dashboard_summary(&Default::default()).await?;
//! ```

pub mod client;
pub mod config;
pub mod dto;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod session;
pub mod transport;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use dto::auth::{LoginRequest, RegisterRequest};
pub use dto::profile::{ProfileUpdate, UserProfile};
pub use dto::queries::{
    DashboardQuery, InvoiceQuery, ListQuery, PaymentQuery, ProductQuery, RecurringQuery,
};
pub use endpoints::recurring::RecurringPatch;
pub use endpoints::{DashboardView, InvoiceDetail};
pub use envelope::{ListMeta, Page};
pub use error::ApiError;
pub use session::{BearerToken, FileTokenStore, MemoryTokenStore, Session, TokenStore};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
