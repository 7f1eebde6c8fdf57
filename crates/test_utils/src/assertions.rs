//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more
//! meaningful error messages than standard assertions.

use rust_decimal::Decimal;

use domain_invoicing::invoice::{Invoice, InvoiceAction};
use domain_invoicing::reconciliation::PaymentSummary;

/// Asserts that every mutating action is rejected for the invoice
///
/// # Panics
///
/// Panics naming the first action the invoice wrongly permits
pub fn assert_fully_locked(invoice: &Invoice) {
    for action in [
        InvoiceAction::Send,
        InvoiceAction::Cancel,
        InvoiceAction::RecordPayment,
        InvoiceAction::Edit,
    ] {
        assert!(
            !invoice.permits(action),
            "Invoice in status {} must reject {}, but permits it",
            invoice.status,
            action
        );
    }
}

/// Asserts the reconciliation figures against expected values
pub fn assert_summary(summary: &PaymentSummary, total_paid: Decimal, remaining: Decimal) {
    assert_eq!(
        summary.total_paid, total_paid,
        "total_paid mismatch: got {}, expected {}",
        summary.total_paid, total_paid
    );
    assert_eq!(
        summary.remaining, remaining,
        "remaining mismatch: got {}, expected {}",
        summary.remaining, remaining
    );
}

/// Asserts that a remaining balance is never negative
pub fn assert_remaining_non_negative(summary: &PaymentSummary) {
    assert!(
        summary.remaining >= Decimal::ZERO,
        "remaining balance went negative: {}",
        summary.remaining
    );
}
