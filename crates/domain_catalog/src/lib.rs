//! Catalog Domain - Products and Categories
//!
//! Products exist to prefill invoice line items; a product optionally
//! belongs to one category by weak reference. Both support soft delete:
//! a `deletedAt` stamp plus an include-deleted toggle on list queries,
//! never physical removal.

pub mod category;
pub mod error;
pub mod product;
pub mod visibility;

pub use category::{Category, CategoryDraft};
pub use error::CatalogError;
pub use product::{Product, ProductDraft};
pub use visibility::Visibility;
