//! Category operations

use core_kernel::CategoryId;
use domain_catalog::{Category, CategoryDraft, Visibility};

use crate::client::ApiClient;
use crate::envelope::{self, Page};
use crate::error::ApiError;

impl ApiClient {
    /// `GET /categories`
    pub async fn list_categories(
        &self,
        visibility: Visibility,
    ) -> Result<Page<Category>, ApiError> {
        let query = vec![(
            "includeDeleted".to_string(),
            visibility.as_query_value().to_string(),
        )];
        let body = self.get("/categories", query).await?;
        envelope::page(&body)
    }

    /// `POST /categories`
    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, ApiError> {
        draft.check()?;
        let body = self.post("/categories", draft).await?;
        envelope::item(&body)
    }

    /// `PATCH /categories/:id`: rename
    pub async fn rename_category(
        &self,
        id: &CategoryId,
        draft: &CategoryDraft,
    ) -> Result<Category, ApiError> {
        draft.check()?;
        let body = self.patch(&format!("/categories/{id}"), draft).await?;
        envelope::item(&body)
    }

    /// `DELETE /categories/:id`: soft delete (stamps `deletedAt`)
    pub async fn delete_category(&self, id: &CategoryId) -> Result<(), ApiError> {
        self.delete(&format!("/categories/{id}")).await?;
        Ok(())
    }
}
