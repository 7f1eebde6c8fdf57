//! Recurring-rule operations

use serde::Serialize;

use core_kernel::RecurringRuleId;
use domain_invoicing::{RecurringDraft, RecurringRule};

use crate::client::ApiClient;
use crate::dto::queries::RecurringQuery;
use crate::envelope::{self, Page};
use crate::error::ApiError;

/// Partial update for `PATCH /recurring/:id`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
}

impl ApiClient {
    /// `GET /recurring`
    pub async fn list_recurring(
        &self,
        query: &RecurringQuery,
    ) -> Result<Page<RecurringRule>, ApiError> {
        let body = self.get("/recurring", query.to_pairs()).await?;
        envelope::page(&body)
    }

    /// `POST /recurring`
    pub async fn create_recurring(&self, draft: &RecurringDraft) -> Result<RecurringRule, ApiError> {
        draft.check()?;
        let body = self.post("/recurring", draft).await?;
        envelope::item(&body)
    }

    /// `PATCH /recurring/:id`
    pub async fn update_recurring(
        &self,
        id: &RecurringRuleId,
        patch: &RecurringPatch,
    ) -> Result<RecurringRule, ApiError> {
        let body = self.patch(&format!("/recurring/{id}"), patch).await?;
        envelope::item(&body)
    }

    /// Toggles a rule's active flag
    pub async fn set_recurring_active(
        &self,
        id: &RecurringRuleId,
        is_active: bool,
    ) -> Result<RecurringRule, ApiError> {
        self.update_recurring(
            id,
            &RecurringPatch {
                is_active: Some(is_active),
                ..RecurringPatch::default()
            },
        )
        .await
    }

    /// `POST /recurring/run`: manual trigger; with an id runs one rule,
    /// without runs everything currently due. Generation itself happens
    /// server-side.
    pub async fn run_recurring(&self, id: Option<&RecurringRuleId>) -> Result<String, ApiError> {
        let body = match id {
            Some(id) => serde_json::json!({ "id": id }),
            None => serde_json::json!({}),
        };
        let response = self.post("/recurring/run", &body).await?;
        Ok(envelope::message(&response).unwrap_or_else(|| "Recurring run triggered".to_string()))
    }
}
