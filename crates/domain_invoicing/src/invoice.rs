//! Invoice lifecycle and entities
//!
//! The status model here is the contract every mutating screen depends on:
//! which actions (send, cancel, record a payment, edit) are permitted for
//! an invoice in its current status. `Paid` and `Cancelled` are terminal;
//! once an invoice reaches either, every action is rejected. The server
//! remains authoritative for the actual transition, so a permitted action
//! can still come back rejected, but gating here keeps the client from
//! issuing requests that can only fail or silently no-op.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use core_kernel::{lenient, parse_date_safe, ClientId, DateWindow, InvoiceId, ProductId};

use crate::error::InvoicingError;

/// Invoice status as assigned by the server
///
/// `Pending` and `Overdue` are derived server-side (manual marking and
/// due-date comparison respectively); no client action sets them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    /// Invoice is being drafted
    Draft,
    /// Invoice has been sent to the client
    Sent,
    /// Awaiting payment (server-assigned)
    Pending,
    /// Fully paid (terminal)
    Paid,
    /// Past due date (server-assigned)
    Overdue,
    /// Cancelled (terminal)
    Cancelled,
}

impl InvoiceStatus {
    /// Parses the wire form tolerantly (any casing, surrounding whitespace)
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "DRAFT" => Some(InvoiceStatus::Draft),
            "SENT" => Some(InvoiceStatus::Sent),
            "PENDING" => Some(InvoiceStatus::Pending),
            "PAID" => Some(InvoiceStatus::Paid),
            "OVERDUE" => Some(InvoiceStatus::Overdue),
            "CANCELLED" => Some(InvoiceStatus::Cancelled),
            _ => None,
        }
    }

    /// Returns the wire form
    pub fn as_wire(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "DRAFT",
            InvoiceStatus::Sent => "SENT",
            InvoiceStatus::Pending => "PENDING",
            InvoiceStatus::Paid => "PAID",
            InvoiceStatus::Overdue => "OVERDUE",
            InvoiceStatus::Cancelled => "CANCELLED",
        }
    }

    /// Terminal statuses permit no further mutation of any kind
    pub fn is_terminal(&self) -> bool {
        matches!(self, InvoiceStatus::Paid | InvoiceStatus::Cancelled)
    }

    /// Returns true if the action is permitted in this status
    pub fn permits(&self, action: InvoiceAction) -> bool {
        match action {
            InvoiceAction::Send => {
                matches!(self, InvoiceStatus::Draft | InvoiceStatus::Pending)
            }
            InvoiceAction::Cancel => matches!(
                self,
                InvoiceStatus::Draft | InvoiceStatus::Sent | InvoiceStatus::Pending
            ),
            InvoiceAction::RecordPayment | InvoiceAction::Edit => !self.is_terminal(),
        }
    }

    /// Rejects the action with a descriptive error when not permitted
    pub fn ensure(&self, action: InvoiceAction) -> Result<(), InvoicingError> {
        if self.permits(action) {
            return Ok(());
        }
        Err(InvoicingError::ActionNotPermitted {
            action,
            status: *self,
        })
    }

    /// Client-side optimistic transition for a permitted action
    ///
    /// Send moves to `Sent` and Cancel to `Cancelled`; RecordPayment and
    /// Edit leave the status unchanged (the server may still flip a fully
    /// paid invoice to `Paid` on its own).
    pub fn apply(&self, action: InvoiceAction) -> Result<InvoiceStatus, InvoicingError> {
        self.ensure(action)?;
        Ok(match action {
            InvoiceAction::Send => InvoiceStatus::Sent,
            InvoiceAction::Cancel => InvoiceStatus::Cancelled,
            InvoiceAction::RecordPayment | InvoiceAction::Edit => *self,
        })
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// User-triggered actions gated by the status model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceAction {
    Send,
    Cancel,
    RecordPayment,
    Edit,
}

impl fmt::Display for InvoiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InvoiceAction::Send => "Send",
            InvoiceAction::Cancel => "Cancel",
            InvoiceAction::RecordPayment => "Record payment",
            InvoiceAction::Edit => "Edit",
        };
        write!(f, "{}", label)
    }
}

/// Client contact embedded in an invoice response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub id: ClientId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// An invoice as returned by the server
///
/// All amounts are server-computed; `total` already includes tax and
/// discount. Dates stay in their wire form and are parsed on use so a
/// malformed value degrades to "no date" instead of failing the whole
/// response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub client_id: ClientId,
    #[serde(default)]
    pub client: Option<ClientSummary>,
    #[serde(default)]
    pub issue_date: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub currency: String,
    pub status: InvoiceStatus,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub subtotal: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub tax_amount: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub discount_amount: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Due date as a calendar day, if parseable
    pub fn due_on(&self) -> Option<NaiveDate> {
        parse_date_safe(&self.due_date)
    }

    /// Issue date as a calendar day, if parseable
    pub fn issued_on(&self) -> Option<NaiveDate> {
        parse_date_safe(&self.issue_date)
    }

    /// Returns true if the action is permitted in the current status
    pub fn permits(&self, action: InvoiceAction) -> bool {
        self.status.permits(action)
    }

    /// Rejects the action when the current status does not permit it
    pub fn ensure(&self, action: InvoiceAction) -> Result<(), InvoicingError> {
        self.status.ensure(action)
    }

    /// True when the invoice is unpaid and past its due date
    ///
    /// Terminal invoices are never overdue; an unparseable due date is
    /// treated as not overdue rather than guessed at.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        match self.due_on() {
            Some(due) => due < today,
            None => false,
        }
    }

    /// True when the invoice is open and due inside the window
    pub fn is_due_within(&self, window: &DateWindow) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        match self.due_on() {
            Some(due) => window.contains(due),
            None => false,
        }
    }

    /// Locally computed total for display reconciliation
    ///
    /// The server's `total` is authoritative; this is the sum of line
    /// totals plus tax minus discount, floored at zero, used to spot a
    /// mismatch before it reaches a rendered figure.
    pub fn computed_total(&self) -> Decimal {
        let subtotal: Decimal = self.items.iter().map(|item| item.total()).sum();
        (subtotal + self.tax_amount - self.discount_amount).max(Decimal::ZERO)
    }
}

/// A line item owned by exactly one invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    #[serde(default)]
    pub id: Option<String>,
    pub item_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub quantity: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub unit_price: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub line_total: Option<Decimal>,
    /// Lookup-only back-reference used to prefill from a product
    #[serde(default)]
    pub product_id: Option<ProductId>,
}

impl InvoiceItem {
    /// Line total: the server's figure when present, else quantity × price
    pub fn total(&self) -> Decimal {
        self.line_total
            .unwrap_or_else(|| self.quantity * self.unit_price)
    }
}

/// Authoring payload for a new or edited invoice
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub client_id: ClientId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 120))]
    pub payment_terms: Option<String>,
    pub currency: String,
    pub tax_amount: Decimal,
    pub discount_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub notes: Option<String>,
    #[validate(nested)]
    pub items: Vec<InvoiceItemDraft>,
}

impl InvoiceDraft {
    /// Starts a draft with the usual defaults
    pub fn new(client_id: ClientId, issue_date: NaiveDate, due_date: NaiveDate) -> Self {
        Self {
            client_id,
            invoice_number: None,
            issue_date,
            due_date,
            payment_terms: None,
            currency: "IDR".to_string(),
            tax_amount: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            notes: None,
            items: Vec::new(),
        }
    }

    /// Appends a line item
    pub fn with_item(mut self, item: InvoiceItemDraft) -> Self {
        self.items.push(item);
        self
    }

    /// Validates the draft before it is submitted
    pub fn check(&self) -> Result<(), InvoicingError> {
        self.validate()
            .map_err(|e| InvoicingError::Validation(e.to_string()))?;

        if self.client_id.is_empty() {
            return Err(InvoicingError::Validation(
                "A client must be selected".to_string(),
            ));
        }
        if self.items.is_empty() {
            return Err(InvoicingError::Validation(
                "An invoice needs at least one item".to_string(),
            ));
        }
        if self.due_date < self.issue_date {
            return Err(InvoicingError::Validation(
                "Due date must not be before the issue date".to_string(),
            ));
        }
        if self.tax_amount.is_sign_negative() || self.discount_amount.is_sign_negative() {
            return Err(InvoicingError::Validation(
                "Tax and discount must not be negative".to_string(),
            ));
        }
        for item in &self.items {
            item.check()?;
        }
        Ok(())
    }

    /// Sum of line totals plus tax minus discount, floored at zero
    pub fn expected_total(&self) -> Decimal {
        let subtotal: Decimal = self
            .items
            .iter()
            .map(|item| item.quantity * item.unit_price)
            .sum();
        (subtotal + self.tax_amount - self.discount_amount).max(Decimal::ZERO)
    }
}

/// Authoring payload for a single line item
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemDraft {
    #[validate(length(min = 1, max = 120))]
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub description: Option<String>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
}

impl InvoiceItemDraft {
    pub fn new(item_name: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            item_name: item_name.into(),
            description: None,
            quantity,
            unit_price,
            product_id: None,
        }
    }

    /// Marks the item as prefilled from a catalog product
    pub fn from_product(mut self, product_id: ProductId) -> Self {
        self.product_id = Some(product_id);
        self
    }

    fn check(&self) -> Result<(), InvoicingError> {
        self.validate()
            .map_err(|e| InvoicingError::Validation(e.to_string()))?;

        if self.quantity < Decimal::ONE {
            return Err(InvoicingError::Validation(
                "Quantity must be at least 1".to_string(),
            ));
        }
        if self.unit_price.is_sign_negative() {
            return Err(InvoicingError::Validation(
                "Unit price must not be negative".to_string(),
            ));
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

    fn draft_invoice(status: InvoiceStatus) -> Invoice {
        Invoice {
            id: InvoiceId::new("inv-1"),
            invoice_number: "INV-2024-0001".to_string(),
            client_id: ClientId::new("cl-1"),
            client: None,
            issue_date: "2024-03-01".to_string(),
            due_date: "2024-03-15".to_string(),
            payment_terms: None,
            currency: "IDR".to_string(),
            status,
            subtotal: dec!(100000),
            tax_amount: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            total: dec!(100000),
            notes: None,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_terminal_statuses_reject_every_action() {
        for status in [InvoiceStatus::Paid, InvoiceStatus::Cancelled] {
            for action in [
                InvoiceAction::Send,
                InvoiceAction::Cancel,
                InvoiceAction::RecordPayment,
                InvoiceAction::Edit,
            ] {
                assert!(!status.permits(action), "{status} must reject {action}");
                assert!(matches!(
                    status.ensure(action),
                    Err(InvoicingError::ActionNotPermitted { .. })
                ));
            }
        }
    }

    #[test]
    fn test_send_guard_blocks_sent_paid_overdue_cancelled() {
        assert!(InvoiceStatus::Draft.permits(InvoiceAction::Send));
        assert!(InvoiceStatus::Pending.permits(InvoiceAction::Send));
        assert!(!InvoiceStatus::Sent.permits(InvoiceAction::Send));
        assert!(!InvoiceStatus::Overdue.permits(InvoiceAction::Send));
    }

    #[test]
    fn test_cancel_blocked_for_paid_overdue_cancelled() {
        assert!(InvoiceStatus::Draft.permits(InvoiceAction::Cancel));
        assert!(InvoiceStatus::Sent.permits(InvoiceAction::Cancel));
        assert!(!InvoiceStatus::Overdue.permits(InvoiceAction::Cancel));
        assert!(!InvoiceStatus::Paid.permits(InvoiceAction::Cancel));
        assert!(!InvoiceStatus::Cancelled.permits(InvoiceAction::Cancel));
    }

    #[test]
    fn test_record_payment_allowed_while_not_terminal() {
        for status in [
            InvoiceStatus::Draft,
            InvoiceStatus::Sent,
            InvoiceStatus::Pending,
            InvoiceStatus::Overdue,
        ] {
            assert!(status.permits(InvoiceAction::RecordPayment));
        }
    }

    #[test]
    fn test_apply_transitions() {
        assert_eq!(
            InvoiceStatus::Draft.apply(InvoiceAction::Send).unwrap(),
            InvoiceStatus::Sent
        );
        assert_eq!(
            InvoiceStatus::Sent.apply(InvoiceAction::Cancel).unwrap(),
            InvoiceStatus::Cancelled
        );
        assert_eq!(
            InvoiceStatus::Sent
                .apply(InvoiceAction::RecordPayment)
                .unwrap(),
            InvoiceStatus::Sent
        );
        assert!(InvoiceStatus::Paid.apply(InvoiceAction::Send).is_err());
    }

    #[test]
    fn test_status_wire_roundtrip() {
        for status in [
            InvoiceStatus::Draft,
            InvoiceStatus::Sent,
            InvoiceStatus::Pending,
            InvoiceStatus::Paid,
            InvoiceStatus::Overdue,
            InvoiceStatus::Cancelled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_wire()));
            assert_eq!(InvoiceStatus::from_wire(status.as_wire()), Some(status));
        }
        assert_eq!(InvoiceStatus::from_wire(" sent "), Some(InvoiceStatus::Sent));
        assert_eq!(InvoiceStatus::from_wire("VOID"), None);
    }

    #[test]
    fn test_invoice_overdue_detection() {
        let invoice = draft_invoice(InvoiceStatus::Sent);
        assert!(invoice.is_overdue(ymd(2024, 3, 16)));
        assert!(!invoice.is_overdue(ymd(2024, 3, 15)));
    }

    #[test]
    fn test_paid_invoice_never_overdue() {
        let invoice = draft_invoice(InvoiceStatus::Paid);
        assert!(!invoice.is_overdue(ymd(2030, 1, 1)));
    }

    #[test]
    fn test_unparseable_due_date_not_overdue() {
        let mut invoice = draft_invoice(InvoiceStatus::Sent);
        invoice.due_date = "soon".to_string();
        assert!(!invoice.is_overdue(ymd(2030, 1, 1)));
    }

    #[test]
    fn test_item_total_prefers_server_line_total() {
        let item = InvoiceItem {
            id: None,
            item_name: "Design work".to_string(),
            description: None,
            quantity: dec!(2),
            unit_price: dec!(10000),
            line_total: Some(dec!(19000)),
            product_id: None,
        };
        assert_eq!(item.total(), dec!(19000));
    }

    #[test]
    fn test_computed_total_matches_server_shape() {
        let mut invoice = draft_invoice(InvoiceStatus::Draft);
        invoice.items = vec![
            InvoiceItem {
                id: None,
                item_name: "Design".to_string(),
                description: None,
                quantity: dec!(2),
                unit_price: dec!(10000),
                line_total: None,
                product_id: None,
            },
            InvoiceItem {
                id: None,
                item_name: "Hosting".to_string(),
                description: None,
                quantity: dec!(1),
                unit_price: dec!(5000),
                line_total: None,
                product_id: None,
            },
        ];
        assert_eq!(invoice.computed_total(), dec!(25000));
    }

    #[test]
    fn test_draft_check_requires_items() {
        let draft = InvoiceDraft::new(ClientId::new("cl-1"), ymd(2024, 3, 1), ymd(2024, 3, 15));
        assert!(matches!(draft.check(), Err(InvoicingError::Validation(_))));
    }

    #[test]
    fn test_draft_check_rejects_zero_quantity() {
        let draft = InvoiceDraft::new(ClientId::new("cl-1"), ymd(2024, 3, 1), ymd(2024, 3, 15))
            .with_item(InvoiceItemDraft::new("Work", Decimal::ZERO, dec!(1000)));
        assert!(draft.check().is_err());
    }

    #[test]
    fn test_draft_expected_total() {
        let draft = InvoiceDraft::new(ClientId::new("cl-1"), ymd(2024, 3, 1), ymd(2024, 3, 15))
            .with_item(InvoiceItemDraft::new("A", dec!(2), dec!(10000)))
            .with_item(InvoiceItemDraft::new("B", dec!(1), dec!(5000)));
        assert!(draft.check().is_ok());
        assert_eq!(draft.expected_total(), dec!(25000));
    }

    #[test]
    fn test_invoice_deserializes_string_decimals() {
        let invoice: Invoice = serde_json::from_value(serde_json::json!({
            "id": "inv-1",
            "invoiceNumber": "INV-2024-0001",
            "clientId": "cl-1",
            "issueDate": "2024-03-01",
            "dueDate": "2024-03-15",
            "currency": "IDR",
            "status": "SENT",
            "subtotal": "100000",
            "taxAmount": "11000",
            "discountAmount": "0",
            "total": "111000",
            "items": [
                {"itemName": "Design", "quantity": "2", "unitPrice": "50000"}
            ]
        }))
        .unwrap();

        assert_eq!(invoice.status, InvoiceStatus::Sent);
        assert_eq!(invoice.total, dec!(111000));
        assert_eq!(invoice.items[0].total(), dec!(100000));
        assert_eq!(invoice.due_on(), Some(ymd(2024, 3, 15)));
    }
}
