//! Client (customer) operations

use core_kernel::ClientId;
use domain_party::{Client, ClientDraft};

use crate::client::ApiClient;
use crate::dto::queries::ListQuery;
use crate::envelope::{self, Page};
use crate::error::ApiError;

impl ApiClient {
    /// `GET /clients`
    pub async fn list_clients(&self, query: &ListQuery) -> Result<Page<Client>, ApiError> {
        let body = self.get("/clients", query.to_pairs()).await?;
        envelope::page(&body)
    }

    /// `GET /clients/:id`
    pub async fn get_client(&self, id: &ClientId) -> Result<Client, ApiError> {
        let body = self.get(&format!("/clients/{id}"), Vec::new()).await?;
        envelope::item(&body)
    }

    /// `POST /clients`
    pub async fn create_client(&self, draft: &ClientDraft) -> Result<Client, ApiError> {
        draft.check()?;
        let body = self.post("/clients", draft).await?;
        envelope::item(&body)
    }

    /// `PATCH /clients/:id`
    pub async fn update_client(
        &self,
        id: &ClientId,
        draft: &ClientDraft,
    ) -> Result<Client, ApiError> {
        draft.check()?;
        let body = self.patch(&format!("/clients/{id}"), draft).await?;
        envelope::item(&body)
    }

    /// `DELETE /clients/:id`
    pub async fn delete_client(&self, id: &ClientId) -> Result<(), ApiError> {
        self.delete(&format!("/clients/{id}")).await?;
        Ok(())
    }
}
