//! List-query parameters
//!
//! Pagination mechanics are passed through untouched; the server owns
//! page math. Each query type renders itself to the wire pairs its
//! endpoint expects.

use core_kernel::{CategoryId, InvoiceId};
use domain_catalog::Visibility;
use domain_invoicing::{InvoiceStatus, DEFAULT_DUE_SOON_DAYS};

/// Generic q/page/limit query used by clients and categories
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub q: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuery {
    pub fn search(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }

    pub fn page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = &self.q {
            if !q.trim().is_empty() {
                pairs.push(("q".to_string(), q.trim().to_string()));
            }
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

/// Query for `GET /invoices`
#[derive(Debug, Clone, Default)]
pub struct InvoiceQuery {
    pub q: Option<String>,
    pub status: Option<InvoiceStatus>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl InvoiceQuery {
    pub fn with_status(mut self, status: InvoiceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = ListQuery {
            q: self.q.clone(),
            page: self.page,
            limit: self.limit,
        }
        .to_pairs();
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_wire().to_string()));
        }
        pairs
    }
}

/// Query for `GET /products`
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub q: Option<String>,
    pub category_id: Option<CategoryId>,
    pub visibility: Visibility,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ProductQuery {
    pub fn in_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn including_deleted(mut self) -> Self {
        self.visibility = Visibility::IncludeDeleted;
        self
    }

    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = ListQuery {
            q: self.q.clone(),
            page: self.page,
            limit: self.limit,
        }
        .to_pairs();
        if let Some(category_id) = &self.category_id {
            pairs.push(("categoryId".to_string(), category_id.to_string()));
        }
        pairs.push((
            "includeDeleted".to_string(),
            self.visibility.as_query_value().to_string(),
        ));
        pairs
    }
}

/// Query for `GET /payments`
#[derive(Debug, Clone)]
pub struct PaymentQuery {
    pub invoice_id: InvoiceId,
    pub page: u32,
    pub limit: u32,
}

impl PaymentQuery {
    /// Payments for one invoice; the page size is generous because the
    /// reconciliation figures need the full list
    pub fn for_invoice(invoice_id: InvoiceId) -> Self {
        Self {
            invoice_id,
            page: 1,
            limit: 50,
        }
    }

    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("invoiceId".to_string(), self.invoice_id.to_string()),
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ]
    }
}

/// Query for `GET /recurring`
#[derive(Debug, Clone, Default)]
pub struct RecurringQuery {
    pub active: Option<bool>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl RecurringQuery {
    pub fn active_only() -> Self {
        Self {
            active: Some(true),
            ..Self::default()
        }
    }

    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(active) = self.active {
            pairs.push(("active".to_string(), active.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

/// Query for `GET /dashboard/summary`
#[derive(Debug, Clone)]
pub struct DashboardQuery {
    /// How many recent invoices/payments to return
    pub limit: u32,
    /// Forward window for the due-soon list, in days
    pub due_soon_days: u32,
    /// 0 = current month, -1 = previous, etc.
    pub month_offset: i32,
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            limit: 5,
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
            month_offset: 0,
        }
    }
}

impl DashboardQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("limit".to_string(), self.limit.to_string()),
            ("dueSoonDays".to_string(), self.due_soon_days.to_string()),
            ("monthOffset".to_string(), self.month_offset.to_string()),
        ]
    }
}
