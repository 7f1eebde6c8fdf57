//! Core Kernel - Foundational types and utilities for the invoicing system
//!
//! This crate provides the fundamental building blocks used across all
//! domain modules:
//! - Money types with precise decimal arithmetic and lenient wire coercion
//! - Calendar-date parsing that never shifts a bare date across midnight
//! - Opaque, strongly-typed server-assigned identifiers

pub mod error;
pub mod identifiers;
pub mod money;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{
    CategoryId, ClientId, InvoiceId, PaymentId, ProductId, RecurringRuleId, UserId,
};
pub use money::{lenient, Currency, Money, MoneyError};
pub use temporal::{parse_date_safe, DateWindow, TemporalError, Timezone};
