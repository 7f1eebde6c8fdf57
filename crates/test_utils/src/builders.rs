//! Test Data Builders
//!
//! Builder patterns for constructing test entities with sensible
//! defaults. Tests specify only the relevant fields and take defaults
//! for everything else.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClientId, InvoiceId, PaymentId, RecurringRuleId};
use domain_invoicing::invoice::{Invoice, InvoiceItem, InvoiceStatus};
use domain_invoicing::payment::{Payment, PaymentMethod};
use domain_invoicing::recurring::{Frequency, RecurringRule};

use crate::fixtures::{IdFixtures, StringFixtures, TemporalFixtures};

/// Builder for test invoices
pub struct TestInvoiceBuilder {
    id: InvoiceId,
    invoice_number: String,
    client_id: ClientId,
    status: InvoiceStatus,
    issue_date: String,
    due_date: String,
    currency: String,
    total: Decimal,
    tax_amount: Decimal,
    discount_amount: Decimal,
    items: Vec<InvoiceItem>,
}

impl Default for TestInvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvoiceBuilder {
    /// Creates a builder with default values: a sent IDR invoice of
    /// 100000 due tomorrow
    pub fn new() -> Self {
        Self {
            id: InvoiceId::new(IdFixtures::invoice_id()),
            invoice_number: StringFixtures::invoice_number().to_string(),
            client_id: ClientId::new(IdFixtures::client_id()),
            status: InvoiceStatus::Sent,
            issue_date: "2024-03-01".to_string(),
            due_date: "2024-03-16".to_string(),
            currency: "IDR".to_string(),
            total: dec!(100000),
            tax_amount: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            items: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = InvoiceId::new(id);
        self
    }

    pub fn with_status(mut self, status: InvoiceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_total(mut self, total: Decimal) -> Self {
        self.total = total;
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    pub fn due_on(mut self, date: NaiveDate) -> Self {
        self.due_date = date.format("%Y-%m-%d").to_string();
        self
    }

    pub fn overdue_since_yesterday(self) -> Self {
        self.due_on(TemporalFixtures::yesterday())
    }

    pub fn with_item(mut self, name: &str, quantity: Decimal, unit_price: Decimal) -> Self {
        self.items.push(InvoiceItem {
            id: None,
            item_name: name.to_string(),
            description: None,
            quantity,
            unit_price,
            line_total: None,
            product_id: None,
        });
        self
    }

    pub fn build(self) -> Invoice {
        let subtotal: Decimal = self.items.iter().map(|i| i.total()).sum();
        Invoice {
            id: self.id,
            invoice_number: self.invoice_number,
            client_id: self.client_id,
            client: None,
            issue_date: self.issue_date,
            due_date: self.due_date,
            payment_terms: None,
            currency: self.currency,
            status: self.status,
            subtotal,
            tax_amount: self.tax_amount,
            discount_amount: self.discount_amount,
            total: self.total,
            notes: None,
            items: self.items,
        }
    }
}

/// Builder for test payments
pub struct TestPaymentBuilder {
    id: PaymentId,
    invoice_id: InvoiceId,
    amount: Decimal,
    paid_at: String,
    method: Option<PaymentMethod>,
}

impl Default for TestPaymentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPaymentBuilder {
    pub fn new() -> Self {
        Self {
            id: PaymentId::new(IdFixtures::payment_id()),
            invoice_id: InvoiceId::new(IdFixtures::invoice_id()),
            amount: dec!(30000),
            paid_at: "2024-03-10".to_string(),
            method: Some(PaymentMethod::Transfer),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = PaymentId::new(id);
        self
    }

    pub fn for_invoice(mut self, invoice_id: &InvoiceId) -> Self {
        self.invoice_id = invoice_id.clone();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_method(mut self, method: PaymentMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn build(self) -> Payment {
        Payment {
            id: self.id,
            invoice_id: self.invoice_id,
            user_id: None,
            amount: self.amount,
            paid_at: self.paid_at,
            method: self.method,
            notes: None,
        }
    }
}

/// Builder for test recurring rules
pub struct TestRecurringRuleBuilder {
    id: RecurringRuleId,
    client_id: ClientId,
    frequency: Frequency,
    interval: u32,
    is_active: bool,
    next_run_at: String,
}

impl Default for TestRecurringRuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRecurringRuleBuilder {
    pub fn new() -> Self {
        Self {
            id: RecurringRuleId::new("rec_01hxyztest0001"),
            client_id: ClientId::new(IdFixtures::client_id()),
            frequency: Frequency::Monthly,
            interval: 1,
            is_active: true,
            next_run_at: "2024-04-01".to_string(),
        }
    }

    pub fn with_frequency(mut self, frequency: Frequency, interval: u32) -> Self {
        self.frequency = frequency;
        self.interval = interval;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn build(self) -> RecurringRule {
        RecurringRule {
            id: self.id,
            client_id: self.client_id,
            template_invoice_id: None,
            frequency: self.frequency,
            interval: self.interval,
            start_at: "2024-03-01".to_string(),
            end_at: None,
            next_run_at: self.next_run_at,
            is_active: self.is_active,
            client: None,
            template_invoice: None,
        }
    }
}
