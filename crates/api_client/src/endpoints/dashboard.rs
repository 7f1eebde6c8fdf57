//! Dashboard operations

use domain_invoicing::{DashboardSummary, InvoiceDigest};

use crate::client::ApiClient;
use crate::dto::queries::DashboardQuery;
use crate::envelope;
use crate::error::ApiError;

/// The dashboard summary plus the derived fallback figures
///
/// `overdue_count` and `due_soon` are the values a screen should render:
/// the server figures protected against undercounts and empty lists by
/// the local derivation over `recent_invoices`.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub summary: DashboardSummary,
    pub overdue_count: u64,
    pub due_soon: Vec<InvoiceDigest>,
}

impl ApiClient {
    /// `GET /dashboard/summary` with the derived fallbacks applied
    pub async fn dashboard_summary(
        &self,
        query: &DashboardQuery,
    ) -> Result<DashboardView, ApiError> {
        let body = self.get("/dashboard/summary", query.to_pairs()).await?;
        let summary: DashboardSummary = envelope::item(&body)?;

        let today = self.config().timezone.today();
        let overdue_count = summary.derived_overdue_count(today);
        let due_soon = summary.derived_due_soon(today, query.due_soon_days);

        Ok(DashboardView {
            summary,
            overdue_count,
            due_soon,
        })
    }
}
