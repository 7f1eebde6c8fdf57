//! Party Domain - Client Records
//!
//! Clients are the flat contact records invoices bill against. This crate
//! owns the record shape and the form-level validation that blocks a
//! submission before any network call; uniqueness and persistence belong
//! to the server.

pub mod client;
pub mod error;
pub mod validation;

pub use client::{Client, ClientDraft};
pub use error::PartyError;
pub use validation::{validate_client_draft, ValidationResult};
