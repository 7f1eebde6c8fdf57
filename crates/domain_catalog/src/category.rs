//! Product categories

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::CategoryId;

use crate::error::CatalogError;

/// A category as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// True when the record carries a soft-delete stamp
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Payload for creating or renaming a category
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: String,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Validates the draft before it is submitted
    ///
    /// Uniqueness-by-name is the server's invariant; a conflict comes back
    /// as a 4xx whose message is displayed verbatim.
    pub fn check(&self) -> Result<(), CatalogError> {
        self.validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;
        if self.name.trim().is_empty() {
            return Err(CatalogError::Validation("Name is required".to_string()));
        }
        Ok(())
    }
}
