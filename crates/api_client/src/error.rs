//! API error taxonomy
//!
//! Every operation boundary converts failures into one of these variants;
//! nothing propagates unhandled into rendering code, and nothing is
//! retried. Server-reported messages are carried verbatim for display;
//! transport failures collapse to a generic message.

use thiserror::Error;

use domain_catalog::CatalogError;
use domain_invoicing::InvoicingError;
use domain_party::PartyError;

/// Errors surfaced by API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-side validation failed; no request was issued
    #[error("Validation error: {0}")]
    Validation(String),

    /// 401 from the server; the stored token has been cleared and the
    /// session is back to anonymous. Callers redirect to login.
    #[error("Unauthorized")]
    Unauthorized,

    /// Non-2xx from the server with its message carried verbatim
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Network or timeout failure before a response arrived
    #[error("Network error: {0}")]
    Transport(String),

    /// The response arrived but could not be decoded
    #[error("Unexpected response shape: {0}")]
    Decode(String),

    /// Token persistence failed
    #[error("Token storage error: {0}")]
    Storage(String),

    /// The status model rejected the action before any request
    #[error(transparent)]
    Domain(#[from] InvoicingError),
}

impl ApiError {
    /// The string a screen shows the user
    ///
    /// Server messages pass through untranslated; transport and decode
    /// failures fall back to a generic line.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Transport(_) | ApiError::Decode(_) | ApiError::Storage(_) => {
                "Something went wrong. Please try again.".to_string()
            }
            ApiError::Domain(err) => err.to_string(),
        }
    }

    /// HTTP status carried by a server rejection, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

impl From<PartyError> for ApiError {
    fn from(err: PartyError) -> Self {
        match err {
            PartyError::Validation(msg) => ApiError::Validation(msg),
            PartyError::NotFound(msg) => ApiError::Server {
                status: 404,
                message: msg,
            },
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(msg) => ApiError::Validation(msg),
            CatalogError::NotFound(msg) => ApiError::Server {
                status: 404,
                message: msg,
            },
        }
    }
}
