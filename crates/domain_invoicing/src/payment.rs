//! Payment records
//!
//! Payments belong to exactly one invoice and are deletable independently;
//! a deletion is followed by a refetch, never by local subtraction, so the
//! reconciliation figures cannot drift from the server's view.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{lenient, parse_date_safe, InvoiceId, PaymentId, UserId};

use crate::error::InvoicingError;

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Bank transfer
    Transfer,
    /// Cash
    Cash,
    /// Digital wallet
    Ewallet,
    /// Anything else
    Other,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Transfer
    }
}

/// A payment as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub invoice_id: InvoiceId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub amount: Decimal,
    #[serde(default)]
    pub paid_at: String,
    #[serde(default)]
    pub method: Option<PaymentMethod>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Payment {
    /// Payment date as a calendar day, if parseable
    pub fn paid_on(&self) -> Option<NaiveDate> {
        parse_date_safe(&self.paid_at)
    }
}

/// Payload for recording a new payment
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub invoice_id: InvoiceId,
    pub amount: Decimal,
    pub paid_at: NaiveDate,
    pub method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 500))]
    pub notes: Option<String>,
}

impl NewPayment {
    pub fn new(invoice_id: InvoiceId, amount: Decimal, paid_at: NaiveDate) -> Self {
        Self {
            invoice_id,
            amount,
            paid_at,
            method: PaymentMethod::default(),
            notes: None,
        }
    }

    pub fn with_method(mut self, method: PaymentMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }

    /// Validates the payload before it is submitted
    pub fn check(&self) -> Result<(), InvoicingError> {
        self.validate()
            .map_err(|e| InvoicingError::Validation(e.to_string()))?;

        if self.invoice_id.is_empty() {
            return Err(InvoicingError::Validation(
                "invoiceId is required".to_string(),
            ));
        }
        if self.amount <= Decimal::ZERO {
            return Err(InvoicingError::NonPositiveAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_method_wire_form() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Ewallet).unwrap(),
            "\"EWALLET\""
        );
        let back: PaymentMethod = serde_json::from_str("\"TRANSFER\"").unwrap();
        assert_eq!(back, PaymentMethod::Transfer);
    }

    #[test]
    fn test_payment_deserializes_decimal_string() {
        let payment: Payment = serde_json::from_value(serde_json::json!({
            "id": "pay-1",
            "invoiceId": "inv-1",
            "amount": "30000",
            "paidAt": "2024-03-10",
            "method": "CASH"
        }))
        .unwrap();

        assert_eq!(payment.amount, dec!(30000));
        assert_eq!(payment.method, Some(PaymentMethod::Cash));
        assert_eq!(payment.paid_on(), Some(ymd(2024, 3, 10)));
    }

    #[test]
    fn test_new_payment_serializes_bare_date() {
        let payment = NewPayment::new(InvoiceId::new("inv-1"), dec!(50000), ymd(2024, 3, 10));
        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["paidAt"], "2024-03-10");
        assert_eq!(json["method"], "TRANSFER");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_new_payment_rejects_non_positive_amount() {
        let zero = NewPayment::new(InvoiceId::new("inv-1"), Decimal::ZERO, ymd(2024, 3, 10));
        assert!(matches!(zero.check(), Err(InvoicingError::NonPositiveAmount)));

        let negative = NewPayment::new(InvoiceId::new("inv-1"), dec!(-5), ymd(2024, 3, 10));
        assert!(matches!(
            negative.check(),
            Err(InvoicingError::NonPositiveAmount)
        ));
    }

    #[test]
    fn test_new_payment_blank_notes_dropped() {
        let payment = NewPayment::new(InvoiceId::new("inv-1"), dec!(100), ymd(2024, 3, 10))
            .with_notes("   ");
        assert_eq!(payment.notes, None);
    }
}
