//! Invoice operations
//!
//! Every mutating operation is gated on the invoice's current status
//! before a request goes out; a terminal invoice never reaches the wire.
//! The server can still reject a permitted action, and its message is
//! surfaced verbatim.

use domain_invoicing::{reconcile, Invoice, InvoiceAction, InvoiceDraft, Payment, PaymentSummary};

use core_kernel::InvoiceId;

use crate::client::ApiClient;
use crate::dto::queries::{InvoiceQuery, PaymentQuery};
use crate::envelope::{self, Page};
use crate::error::ApiError;

/// Everything the invoice-detail screen needs in one load
#[derive(Debug, Clone)]
pub struct InvoiceDetail {
    pub invoice: Invoice,
    pub payments: Vec<Payment>,
    pub summary: PaymentSummary,
}

impl ApiClient {
    /// `GET /invoices`
    pub async fn list_invoices(&self, query: &InvoiceQuery) -> Result<Page<Invoice>, ApiError> {
        let body = self.get("/invoices", query.to_pairs()).await?;
        envelope::page(&body)
    }

    /// `GET /invoices/:id`
    pub async fn get_invoice(&self, id: &InvoiceId) -> Result<Invoice, ApiError> {
        let body = self.get(&format!("/invoices/{id}"), Vec::new()).await?;
        envelope::item(&body)
    }

    /// Loads the detail screen: invoice and payment list fetched
    /// concurrently, reconciled into the paid/remaining figures.
    ///
    /// The two fetches are independent and unordered; if either fails the
    /// whole load fails, so a screen never renders mixed partial data as
    /// if it were complete.
    pub async fn invoice_detail(&self, id: &InvoiceId) -> Result<InvoiceDetail, ApiError> {
        let query = PaymentQuery::for_invoice(id.clone());
        let (invoice, payments) = tokio::try_join!(
            self.get_invoice(id),
            self.payments_for_invoice(&query)
        )?;

        let summary = reconcile(invoice.total, &payments);
        Ok(InvoiceDetail {
            invoice,
            payments,
            summary,
        })
    }

    /// `POST /invoices`; the server assigns the number and computes all
    /// totals
    pub async fn create_invoice(&self, draft: &InvoiceDraft) -> Result<Invoice, ApiError> {
        draft.check()?;
        let body = self.post("/invoices", draft).await?;
        envelope::item(&body)
    }

    /// `PATCH /invoices/:id`: header/items edit, gated on Edit
    pub async fn update_invoice(
        &self,
        invoice: &Invoice,
        draft: &InvoiceDraft,
    ) -> Result<Invoice, ApiError> {
        invoice.ensure(InvoiceAction::Edit)?;
        draft.check()?;
        let body = self.patch(&format!("/invoices/{}", invoice.id), draft).await?;
        envelope::item(&body)
    }

    /// `POST /invoices/:id/send`, gated on Send; returns the refreshed
    /// invoice so the caller renders the server's view of the transition
    pub async fn send_invoice(&self, invoice: &Invoice) -> Result<Invoice, ApiError> {
        invoice.ensure(InvoiceAction::Send)?;
        self.post(&format!("/invoices/{}/send", invoice.id), &serde_json::json!({}))
            .await?;
        self.get_invoice(&invoice.id).await
    }

    /// `PATCH /invoices/:id/cancel`, gated on Cancel; returns the
    /// refreshed invoice
    pub async fn cancel_invoice(&self, invoice: &Invoice) -> Result<Invoice, ApiError> {
        invoice.ensure(InvoiceAction::Cancel)?;
        self.patch(
            &format!("/invoices/{}/cancel", invoice.id),
            &serde_json::json!({}),
        )
        .await?;
        self.get_invoice(&invoice.id).await
    }
}
