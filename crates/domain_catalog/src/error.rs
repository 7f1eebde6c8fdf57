//! Catalog domain errors

use thiserror::Error;

/// Errors that can occur in the catalog domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A draft failed validation before submission
    #[error("Validation error: {0}")]
    Validation(String),

    /// Product or category not found
    #[error("Not found: {0}")]
    NotFound(String),
}
