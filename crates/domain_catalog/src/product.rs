//! Catalog products
//!
//! Products prefill invoice line items at authoring time (name, price,
//! description); the weak `categoryId` reference is lookup-only.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{lenient, CategoryId, ProductId};

use crate::category::Category;
use crate::error::CatalogError;

/// A product as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub unit_price: Decimal,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    /// True when the record carries a soft-delete stamp
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Category name for display, when embedded
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}

/// Payload for creating or updating a product
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub description: Option<String>,
    pub unit_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 30))]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: None,
            unit_price,
            unit: None,
            category_id: None,
        }
    }

    pub fn in_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Validates the draft before it is submitted
    pub fn check(&self) -> Result<(), CatalogError> {
        self.validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;
        if self.name.trim().is_empty() {
            return Err(CatalogError::Validation("Name is required".to_string()));
        }
        if self.unit_price.is_sign_negative() {
            return Err(CatalogError::Validation(
                "Unit price must be >= 0".to_string(),
            ));
        }
        Ok(())
    }
}
