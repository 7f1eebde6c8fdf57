//! Profile operations

use crate::client::ApiClient;
use crate::dto::profile::{ProfileUpdate, UserProfile};
use crate::envelope;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /profile`
    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        let body = self.get("/profile", Vec::new()).await?;
        envelope::item(&body)
    }

    /// `PATCH /profile`
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        update.check()?;
        let body = self.patch("/profile", update).await?;
        envelope::item(&body)
    }
}
