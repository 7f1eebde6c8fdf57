//! Product operations

use core_kernel::ProductId;
use domain_catalog::{Product, ProductDraft};

use crate::client::ApiClient;
use crate::dto::queries::ProductQuery;
use crate::envelope::{self, Page};
use crate::error::ApiError;

impl ApiClient {
    /// `GET /products`
    pub async fn list_products(&self, query: &ProductQuery) -> Result<Page<Product>, ApiError> {
        let body = self.get("/products", query.to_pairs()).await?;
        envelope::page(&body)
    }

    /// `GET /products/:id`
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        let body = self.get(&format!("/products/{id}"), Vec::new()).await?;
        envelope::item(&body)
    }

    /// `POST /products`
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        draft.check()?;
        let body = self.post("/products", draft).await?;
        envelope::item(&body)
    }

    /// `PATCH /products/:id`
    pub async fn update_product(
        &self,
        id: &ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, ApiError> {
        draft.check()?;
        let body = self.patch(&format!("/products/{id}"), draft).await?;
        envelope::item(&body)
    }

    /// `DELETE /products/:id`: soft delete (stamps `deletedAt`)
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        self.delete(&format!("/products/{id}")).await?;
        Ok(())
    }
}
