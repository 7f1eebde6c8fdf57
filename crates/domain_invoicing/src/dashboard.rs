//! Dashboard summary and fallback derivation
//!
//! The server supplies precomputed KPI figures, but its `overdueCount`
//! has been observed stale and its `dueSoonInvoices` list empty while the
//! accompanying `recentInvoices` plainly contain overdue and due-soon
//! rows. The derivations here recompute both figures from the already
//! fetched recent list and merge so the displayed value is never an
//! undercount. Once the backend figures are trustworthy this module can
//! shrink to plain passthrough.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{lenient, parse_date_safe, DateWindow, InvoiceId, PaymentId};

use crate::invoice::{ClientSummary, InvoiceStatus};

/// Forward-looking window for the due-soon list, in days
pub const DEFAULT_DUE_SOON_DAYS: u32 = 7;

/// Headline figures from `GET /dashboard/summary`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total_outstanding: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total_paid_this_month: Decimal,
    #[serde(default, deserialize_with = "lenient::count")]
    pub invoices_this_month: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub overdue_count: u64,
}

/// Invoice row as embedded in the dashboard summary
///
/// The status stays a raw string here: the dashboard must tolerate values
/// the status enum does not know yet, and only PAID/CANCELLED are ever
/// excluded from the derivations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDigest {
    pub id: InvoiceId,
    #[serde(default)]
    pub invoice_number: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total: Decimal,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub client: Option<ClientSummary>,
}

impl InvoiceDigest {
    /// Parsed status, if the server sent a known value
    pub fn status(&self) -> Option<InvoiceStatus> {
        InvoiceStatus::from_wire(&self.status)
    }

    /// Due date as a calendar day, if parseable
    pub fn due_on(&self) -> Option<NaiveDate> {
        parse_date_safe(&self.due_date)
    }

    fn is_open(&self) -> bool {
        !matches!(
            self.status(),
            Some(InvoiceStatus::Paid) | Some(InvoiceStatus::Cancelled)
        )
    }
}

/// Payment row as embedded in the dashboard summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDigest {
    pub id: PaymentId,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub amount: Decimal,
    #[serde(default)]
    pub paid_at: String,
    #[serde(default)]
    pub invoice: Option<InvoiceRef>,
}

/// Invoice reference embedded in a payment row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRef {
    #[serde(default)]
    pub invoice_number: Option<String>,
}

/// The full dashboard summary payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub kpis: Kpis,
    #[serde(default)]
    pub recent_invoices: Vec<InvoiceDigest>,
    #[serde(default)]
    pub recent_payments: Vec<PaymentDigest>,
    #[serde(default)]
    pub due_soon_invoices: Vec<InvoiceDigest>,
}

impl DashboardSummary {
    /// Overdue count, protected against a server undercount
    ///
    /// Counts open recent invoices whose due date is before `today` and
    /// returns the larger of that and the server figure: the server value
    /// may reflect a different "now" or a stale cache, and the recent list
    /// in hand is the fresher signal.
    pub fn derived_overdue_count(&self, today: NaiveDate) -> u64 {
        let server = self.kpis.overdue_count;
        if self.recent_invoices.is_empty() {
            return server;
        }

        let computed = self
            .recent_invoices
            .iter()
            .filter(|inv| inv.is_open())
            .filter(|inv| matches!(inv.due_on(), Some(due) if due < today))
            .count() as u64;

        if computed > server {
            debug!(server, computed, "overdue count derived above server figure");
        }
        server.max(computed)
    }

    /// Due-soon list, derived from recent invoices when the server's own
    /// list is empty
    ///
    /// Window is `[today, today + days]` inclusive; open invoices only;
    /// rows with unparseable due dates are skipped; ascending by due date.
    pub fn derived_due_soon(&self, today: NaiveDate, days: u32) -> Vec<InvoiceDigest> {
        if !self.due_soon_invoices.is_empty() {
            return self.due_soon_invoices.clone();
        }

        let window = DateWindow::forward_days(today, days);
        let mut due_soon: Vec<(NaiveDate, InvoiceDigest)> = self
            .recent_invoices
            .iter()
            .filter(|inv| inv.is_open())
            .filter_map(|inv| inv.due_on().map(|due| (due, inv.clone())))
            .filter(|(due, _)| window.contains(*due))
            .collect();

        due_soon.sort_by_key(|(due, _)| *due);
        due_soon.into_iter().map(|(_, inv)| inv).collect()
    }

    /// True when there is anything worth rendering at all
    pub fn has_any_data(&self) -> bool {
        !self.recent_invoices.is_empty()
            || !self.recent_payments.is_empty()
            || !self.due_soon_invoices.is_empty()
            || self.kpis.invoices_this_month > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn digest(id: &str, status: &str, due_date: &str) -> InvoiceDigest {
        InvoiceDigest {
            id: InvoiceId::new(id),
            invoice_number: format!("INV-{id}"),
            status: status.to_string(),
            total: dec!(100000),
            due_date: due_date.to_string(),
            client: None,
        }
    }

    fn summary_with(recent: Vec<InvoiceDigest>, server_overdue: u64) -> DashboardSummary {
        DashboardSummary {
            kpis: Kpis {
                overdue_count: server_overdue,
                ..Kpis::default()
            },
            recent_invoices: recent,
            recent_payments: Vec::new(),
            due_soon_invoices: Vec::new(),
        }
    }

    #[test]
    fn test_overdue_derived_when_server_says_zero() {
        let today = ymd(2024, 3, 15);
        let summary = summary_with(vec![digest("1", "SENT", "2024-03-14")], 0);

        assert_eq!(summary.derived_overdue_count(today), 1);
    }

    #[test]
    fn test_overdue_prefers_larger_server_figure() {
        let today = ymd(2024, 3, 15);
        // Server sees more overdue invoices than the recent page shows.
        let summary = summary_with(vec![digest("1", "SENT", "2024-03-14")], 5);

        assert_eq!(summary.derived_overdue_count(today), 5);
    }

    #[test]
    fn test_overdue_excludes_paid_and_cancelled() {
        let today = ymd(2024, 3, 15);
        let summary = summary_with(
            vec![
                digest("1", "PAID", "2024-03-01"),
                digest("2", "CANCELLED", "2024-03-01"),
                digest("3", "OVERDUE", "2024-03-01"),
            ],
            0,
        );

        assert_eq!(summary.derived_overdue_count(today), 1);
    }

    #[test]
    fn test_overdue_due_today_is_not_overdue() {
        let today = ymd(2024, 3, 15);
        let summary = summary_with(vec![digest("1", "SENT", "2024-03-15")], 0);

        assert_eq!(summary.derived_overdue_count(today), 0);
    }

    #[test]
    fn test_overdue_skips_unparseable_dates() {
        let today = ymd(2024, 3, 15);
        let summary = summary_with(vec![digest("1", "SENT", "whenever")], 0);

        assert_eq!(summary.derived_overdue_count(today), 0);
    }

    #[test]
    fn test_overdue_unknown_status_counts_as_open() {
        let today = ymd(2024, 3, 15);
        let summary = summary_with(vec![digest("1", "ON_HOLD", "2024-03-01")], 0);

        assert_eq!(summary.derived_overdue_count(today), 1);
    }

    #[test]
    fn test_due_soon_window_and_ordering() {
        let today = ymd(2024, 3, 15);
        let summary = summary_with(
            vec![
                digest("in-10-days", "SENT", "2024-03-25"),
                digest("in-5-days", "SENT", "2024-03-20"),
                digest("in-3-days", "SENT", "2024-03-18"),
            ],
            0,
        );

        let due_soon = summary.derived_due_soon(today, 7);
        let ids: Vec<&str> = due_soon.iter().map(|d| d.id.as_str()).collect();
        // 10 days out is beyond the window; 3 days sorts before 5 days.
        assert_eq!(ids, vec!["in-3-days", "in-5-days"]);
    }

    #[test]
    fn test_due_soon_prefers_server_list_when_present() {
        let today = ymd(2024, 3, 15);
        let mut summary = summary_with(vec![digest("local", "SENT", "2024-03-16")], 0);
        summary.due_soon_invoices = vec![digest("server", "SENT", "2024-03-17")];

        let due_soon = summary.derived_due_soon(today, 7);
        assert_eq!(due_soon.len(), 1);
        assert_eq!(due_soon[0].id.as_str(), "server");
    }

    #[test]
    fn test_due_soon_includes_window_edges() {
        let today = ymd(2024, 3, 15);
        let summary = summary_with(
            vec![
                digest("today", "SENT", "2024-03-15"),
                digest("last-day", "SENT", "2024-03-22"),
                digest("past", "SENT", "2024-03-14"),
            ],
            0,
        );

        let due_soon = summary.derived_due_soon(today, 7);
        let ids: Vec<&str> = due_soon
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ids, vec!["today", "last-day"]);
    }

    #[test]
    fn test_summary_deserializes_inconsistent_kpis() {
        let summary: DashboardSummary = serde_json::from_value(serde_json::json!({
            "kpis": {
                "totalOutstanding": "250000",
                "totalPaidThisMonth": 100000,
                "invoicesThisMonth": "3",
                "overdueCount": null
            },
            "recentInvoices": [],
            "recentPayments": []
        }))
        .unwrap();

        assert_eq!(summary.kpis.total_outstanding, dec!(250000));
        assert_eq!(summary.kpis.invoices_this_month, 3);
        assert_eq!(summary.kpis.overdue_count, 0);
        assert!(!summary.has_any_data() || summary.kpis.invoices_this_month > 0);
    }
}
