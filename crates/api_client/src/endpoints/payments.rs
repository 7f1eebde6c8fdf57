//! Payment operations
//!
//! The remaining-balance guard runs against a freshly fetched payment
//! list, not a cached figure, and deletion is followed by recomputation
//! rather than local subtraction. The guard is advisory; the server's
//! validation remains authoritative and its rejection is displayed
//! verbatim.

use domain_invoicing::{reconcile, Invoice, InvoiceAction, NewPayment, Payment, PaymentSummary};

use core_kernel::PaymentId;

use crate::client::ApiClient;
use crate::dto::queries::PaymentQuery;
use crate::envelope::{self, Page};
use crate::error::ApiError;

impl ApiClient {
    /// `GET /payments?invoiceId=...`: the full payment list for one
    /// invoice
    pub async fn payments_for_invoice(
        &self,
        query: &PaymentQuery,
    ) -> Result<Vec<Payment>, ApiError> {
        let body = self.get("/payments", query.to_pairs()).await?;
        let page: Page<Payment> = envelope::page(&body)?;
        Ok(page.items)
    }

    /// Fetches the fresh payment list and reconciles it against the
    /// invoice total
    pub async fn payment_summary(&self, invoice: &Invoice) -> Result<PaymentSummary, ApiError> {
        let payments = self
            .payments_for_invoice(&PaymentQuery::for_invoice(invoice.id.clone()))
            .await?;
        Ok(reconcile(invoice.total, &payments))
    }

    /// `POST /payments`, gated on the status model and the
    /// remaining-balance guard
    pub async fn create_payment(
        &self,
        invoice: &Invoice,
        payment: &NewPayment,
    ) -> Result<Payment, ApiError> {
        invoice.ensure(InvoiceAction::RecordPayment)?;
        payment.check()?;

        let summary = self.payment_summary(invoice).await?;
        summary.check_new_amount(payment.amount)?;

        let body = self.post("/payments", payment).await?;
        envelope::item(&body)
    }

    /// `DELETE /payments/:id`
    ///
    /// Returns nothing on purpose: the caller refetches via
    /// [`ApiClient::payment_summary`] so the figures are rebuilt from the
    /// refreshed list.
    pub async fn delete_payment(&self, id: &PaymentId) -> Result<(), ApiError> {
        self.delete(&format!("/payments/{id}")).await?;
        Ok(())
    }
}
