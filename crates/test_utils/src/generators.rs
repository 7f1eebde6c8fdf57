//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_invoicing::invoice::InvoiceStatus;
use domain_invoicing::payment::PaymentMethod;

/// Strategy for generating any invoice status
pub fn status_strategy() -> impl Strategy<Value = InvoiceStatus> {
    prop_oneof![
        Just(InvoiceStatus::Draft),
        Just(InvoiceStatus::Sent),
        Just(InvoiceStatus::Pending),
        Just(InvoiceStatus::Paid),
        Just(InvoiceStatus::Overdue),
        Just(InvoiceStatus::Cancelled),
    ]
}

/// Strategy for generating non-terminal invoice statuses
pub fn open_status_strategy() -> impl Strategy<Value = InvoiceStatus> {
    prop_oneof![
        Just(InvoiceStatus::Draft),
        Just(InvoiceStatus::Sent),
        Just(InvoiceStatus::Pending),
        Just(InvoiceStatus::Overdue),
    ]
}

/// Strategy for generating payment methods
pub fn payment_method_strategy() -> impl Strategy<Value = PaymentMethod> {
    prop_oneof![
        Just(PaymentMethod::Transfer),
        Just(PaymentMethod::Cash),
        Just(PaymentMethod::Ewallet),
        Just(PaymentMethod::Other),
    ]
}

/// Strategy for positive whole-unit amounts
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(Decimal::from)
}

/// Strategy for non-negative whole-unit amounts
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(Decimal::from)
}

/// Strategy for lists of payment amounts against one invoice
pub fn payment_amounts_strategy() -> impl Strategy<Value = Vec<Decimal>> {
    proptest::collection::vec(positive_amount_strategy(), 0..10)
}

/// Strategy for bare `YYYY-MM-DD` date strings
pub fn bare_date_strategy() -> impl Strategy<Value = String> {
    (1990i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}
