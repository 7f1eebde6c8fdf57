//! Invoicing Domain - Lifecycle, Reconciliation, and Aggregation
//!
//! This crate owns the pieces of the invoicing product whose correctness
//! has financial consequences:
//!
//! - **Status model**: which actions (send, cancel, record payment, edit)
//!   an invoice permits in its current status; `Paid` and `Cancelled` are
//!   terminal and reject everything.
//! - **Payment reconciliation**: paid/remaining figures derived from the
//!   full payment list, with the remaining balance floored at zero and a
//!   guard against overpaying.
//! - **Dashboard aggregation**: fallback overdue/due-soon derivation from
//!   the recent-invoices list when the server's precomputed figures are
//!   absent or stale.
//! - **Recurring rules**: cadence model for server-generated invoices.
//!
//! The server stays authoritative for every transition and computation;
//! this crate exists so the client never renders, or submits, a figure it
//! cannot defend.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_invoicing::{reconcile, InvoiceAction};
//!
//! invoice.ensure(InvoiceAction::RecordPayment)?;
//! let summary = reconcile(invoice.total, &payments);
//! summary.check_new_amount(amount)?;
//! ```

pub mod dashboard;
pub mod error;
pub mod invoice;
pub mod payment;
pub mod reconciliation;
pub mod recurring;

pub use dashboard::{DashboardSummary, InvoiceDigest, Kpis, PaymentDigest, DEFAULT_DUE_SOON_DAYS};
pub use error::InvoicingError;
pub use invoice::{
    ClientSummary, Invoice, InvoiceAction, InvoiceDraft, InvoiceItem, InvoiceItemDraft,
    InvoiceStatus,
};
pub use payment::{NewPayment, Payment, PaymentMethod};
pub use reconciliation::{reconcile, PaymentSummary};
pub use recurring::{Frequency, RecurringDraft, RecurringRule};
