//! Party domain errors

use thiserror::Error;

/// Errors that can occur in the party domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartyError {
    /// A draft failed validation before submission
    #[error("Validation error: {0}")]
    Validation(String),

    /// Client not found
    #[error("Client not found: {0}")]
    NotFound(String),
}
