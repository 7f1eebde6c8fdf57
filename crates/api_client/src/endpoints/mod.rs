//! Operation methods, one module per API domain

pub mod auth;
pub mod categories;
pub mod clients;
pub mod dashboard;
pub mod invoices;
pub mod payments;
pub mod products;
pub mod profile;
pub mod recurring;

pub use dashboard::DashboardView;
pub use invoices::InvoiceDetail;
