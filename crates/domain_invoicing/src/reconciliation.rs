//! Payment reconciliation
//!
//! Aggregates an invoice's payments into paid/remaining figures. The
//! remaining balance is clamped at zero: an overpayment (possible
//! server-side) still displays a sane figure instead of a negative
//! remainder. Summaries are always rebuilt from a full payment list; no
//! caller decrements a figure in place.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::InvoicingError;
use crate::payment::Payment;

/// Paid and remaining figures for one invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentSummary {
    /// Sum of all recorded payment amounts
    pub total_paid: Decimal,
    /// Invoice total minus total paid, floored at zero
    pub remaining: Decimal,
}

impl PaymentSummary {
    /// True when the payments meet or exceed the invoice total
    pub fn is_settled(&self) -> bool {
        self.remaining.is_zero()
    }

    /// True when payments exceed the invoice total
    pub fn is_overpaid(&self, invoice_total: Decimal) -> bool {
        self.total_paid > invoice_total
    }

    /// Guards a new payment amount against the remaining balance
    ///
    /// Advisory UX check, not a substitute for the server's validation:
    /// a 4xx from the server must still be surfaced even when this guard
    /// passed.
    pub fn check_new_amount(&self, amount: Decimal) -> Result<(), InvoicingError> {
        if amount <= Decimal::ZERO {
            return Err(InvoicingError::NonPositiveAmount);
        }
        if amount > self.remaining {
            return Err(InvoicingError::PaymentExceedsRemaining {
                amount,
                remaining: self.remaining,
            });
        }
        Ok(())
    }
}

/// Recomputes the paid/remaining figures from a fresh payment list
pub fn reconcile(invoice_total: Decimal, payments: &[Payment]) -> PaymentSummary {
    let total_paid: Decimal = payments.iter().map(|p| p.amount).sum();
    PaymentSummary {
        total_paid,
        remaining: (invoice_total - total_paid).max(Decimal::ZERO),
    }
}
