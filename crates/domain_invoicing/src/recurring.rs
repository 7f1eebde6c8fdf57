//! Recurring invoice rules
//!
//! A rule pairs a client with a template invoice (an existing invoice
//! reused as a stencil) and a cadence. The actual invoice generation runs
//! server-side; this side creates rules, toggles them, and triggers a
//! manual run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{parse_date_safe, ClientId, InvoiceId, RecurringRuleId};

use crate::error::InvoicingError;
use crate::invoice::ClientSummary;

/// Recurrence cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    fn unit(&self) -> &'static str {
        match self {
            Frequency::Daily => "day",
            Frequency::Weekly => "week",
            Frequency::Monthly => "month",
            Frequency::Yearly => "year",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        };
        write!(f, "{}", label)
    }
}

/// Template invoice reference embedded in a rule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInvoiceRef {
    pub id: InvoiceId,
    #[serde(default)]
    pub invoice_number: Option<String>,
}

/// A recurring rule as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringRule {
    pub id: RecurringRuleId,
    pub client_id: ClientId,
    #[serde(default)]
    pub template_invoice_id: Option<InvoiceId>,
    pub frequency: Frequency,
    #[serde(default = "default_interval")]
    pub interval: u32,
    #[serde(default)]
    pub start_at: String,
    #[serde(default)]
    pub end_at: Option<String>,
    #[serde(default)]
    pub next_run_at: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub client: Option<ClientSummary>,
    #[serde(default)]
    pub template_invoice: Option<TemplateInvoiceRef>,
}

fn default_interval() -> u32 {
    1
}

impl RecurringRule {
    /// Next scheduled run as a calendar day, if parseable
    pub fn next_run_on(&self) -> Option<NaiveDate> {
        parse_date_safe(&self.next_run_at)
    }

    /// End of the schedule as a calendar day, if set and parseable
    pub fn ends_on(&self) -> Option<NaiveDate> {
        self.end_at.as_deref().and_then(parse_date_safe)
    }

    /// Human-readable cadence, e.g. "every week" or "every 3 months"
    pub fn schedule_label(&self) -> String {
        if self.interval <= 1 {
            format!("every {}", self.frequency.unit())
        } else {
            format!("every {} {}s", self.interval, self.frequency.unit())
        }
    }
}

/// Payload for creating a recurring rule
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDraft {
    pub client_id: ClientId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_invoice_id: Option<InvoiceId>,
    pub frequency: Frequency,
    pub interval: u32,
    pub start_at: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<NaiveDate>,
}

impl RecurringDraft {
    pub fn new(client_id: ClientId, frequency: Frequency, start_at: NaiveDate) -> Self {
        Self {
            client_id,
            template_invoice_id: None,
            frequency,
            interval: 1,
            start_at,
            end_at: None,
        }
    }

    pub fn with_template(mut self, invoice_id: InvoiceId) -> Self {
        self.template_invoice_id = Some(invoice_id);
        self
    }

    pub fn every(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    pub fn until(mut self, end_at: NaiveDate) -> Self {
        self.end_at = Some(end_at);
        self
    }

    /// Validates the payload before it is submitted
    pub fn check(&self) -> Result<(), InvoicingError> {
        if self.client_id.is_empty() {
            return Err(InvoicingError::Validation(
                "A client must be selected".to_string(),
            ));
        }
        if self.interval < 1 {
            return Err(InvoicingError::Validation(
                "Interval must be at least 1".to_string(),
            ));
        }
        if let Some(end_at) = self.end_at {
            if end_at <= self.start_at {
                return Err(InvoicingError::Validation(
                    "End date must be after the start date".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_frequency_wire_form() {
        assert_eq!(
            serde_json::to_string(&Frequency::Monthly).unwrap(),
            "\"MONTHLY\""
        );
        let back: Frequency = serde_json::from_str("\"YEARLY\"").unwrap();
        assert_eq!(back, Frequency::Yearly);
    }

    #[test]
    fn test_schedule_label() {
        let mut rule: RecurringRule = serde_json::from_value(serde_json::json!({
            "id": "rec-1",
            "clientId": "cl-1",
            "frequency": "WEEKLY",
            "interval": 1,
            "nextRunAt": "2024-04-01",
            "isActive": true
        }))
        .unwrap();
        assert_eq!(rule.schedule_label(), "every week");

        rule.interval = 3;
        rule.frequency = Frequency::Monthly;
        assert_eq!(rule.schedule_label(), "every 3 months");
    }

    #[test]
    fn test_rule_parses_next_run() {
        let rule: RecurringRule = serde_json::from_value(serde_json::json!({
            "id": "rec-1",
            "clientId": "cl-1",
            "frequency": "DAILY",
            "nextRunAt": "2024-04-01",
            "isActive": false
        }))
        .unwrap();
        assert_eq!(rule.next_run_on(), Some(ymd(2024, 4, 1)));
        assert_eq!(rule.interval, 1);
        assert_eq!(rule.ends_on(), None);
    }

    #[test]
    fn test_draft_requires_positive_interval() {
        let mut draft =
            RecurringDraft::new(ClientId::new("cl-1"), Frequency::Monthly, ymd(2024, 4, 1));
        draft.interval = 0;
        assert!(draft.check().is_err());
    }

    #[test]
    fn test_draft_end_must_follow_start() {
        let draft = RecurringDraft::new(ClientId::new("cl-1"), Frequency::Monthly, ymd(2024, 4, 1))
            .until(ymd(2024, 4, 1));
        assert!(draft.check().is_err());

        let draft = RecurringDraft::new(ClientId::new("cl-1"), Frequency::Monthly, ymd(2024, 4, 1))
            .until(ymd(2024, 10, 1));
        assert!(draft.check().is_ok());
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = RecurringDraft::new(ClientId::new("cl-1"), Frequency::Weekly, ymd(2024, 4, 1))
            .with_template(InvoiceId::new("inv-9"))
            .every(2);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["clientId"], "cl-1");
        assert_eq!(json["templateInvoiceId"], "inv-9");
        assert_eq!(json["frequency"], "WEEKLY");
        assert_eq!(json["startAt"], "2024-04-01");
        assert!(json.get("endAt").is_none());
    }
}
