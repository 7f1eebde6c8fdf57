//! Invoicing domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::invoice::{InvoiceAction, InvoiceStatus};

/// Errors that can occur in the invoicing domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvoicingError {
    /// The status model forbids this action in the current status
    #[error("{action} is not permitted while the invoice is {status}")]
    ActionNotPermitted {
        action: InvoiceAction,
        status: InvoiceStatus,
    },

    /// A new payment would exceed the remaining balance
    #[error("Payment of {amount} exceeds the remaining balance; maximum allowed is {remaining}")]
    PaymentExceedsRemaining { amount: Decimal, remaining: Decimal },

    /// Payment amounts must be strictly positive
    #[error("Payment amount must be greater than zero")]
    NonPositiveAmount,

    /// A draft failed validation before submission
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_action_not_permitted_message() {
        let err = InvoicingError::ActionNotPermitted {
            action: InvoiceAction::Send,
            status: InvoiceStatus::Paid,
        };
        assert_eq!(err.to_string(), "Send is not permitted while the invoice is PAID");
    }

    #[test]
    fn test_exceeds_remaining_cites_maximum() {
        let err = InvoicingError::PaymentExceedsRemaining {
            amount: dec!(60000),
            remaining: dec!(50000),
        };
        let msg = err.to_string();
        assert!(msg.contains("60000"));
        assert!(msg.contains("maximum allowed is 50000"));
    }
}
