//! Auth operations

use crate::client::ApiClient;
use crate::dto::auth::{AuthPayload, LoginRequest, RegisterRequest};
use crate::envelope;
use crate::error::ApiError;
use crate::session::Session;

impl ApiClient {
    /// `POST /auth/login`: exchanges credentials for a bearer token
    ///
    /// On success the token is persisted and the session becomes
    /// authenticated. A 401 here carries the server's message (wrong
    /// credentials), it does not expire anything.
    pub async fn login(&self, request: LoginRequest) -> Result<Session, ApiError> {
        request.check()?;

        let body = self.post_public("/auth/login", &request).await?;
        let payload: AuthPayload = envelope::item(&body)?;
        let token = payload
            .token()
            .ok_or_else(|| ApiError::Decode("login response carried no token".to_string()))?;

        self.establish_session(token).await
    }

    /// `POST /auth/register`: creates an account
    ///
    /// Returns the server's message; the account still needs email
    /// verification before login succeeds.
    pub async fn register(&self, request: RegisterRequest) -> Result<String, ApiError> {
        request.check()?;

        let body = self.post_public("/auth/register", &request).await?;
        Ok(envelope::message(&body).unwrap_or_else(|| "Registered".to_string()))
    }

    /// `GET /auth/verify-email/:token`: confirms an email address
    pub async fn verify_email(&self, token: &str) -> Result<String, ApiError> {
        if token.trim().is_empty() {
            return Err(ApiError::Validation(
                "Verification token is required".to_string(),
            ));
        }

        let body = self
            .get_public(&format!("/auth/verify-email/{token}"))
            .await?;
        Ok(envelope::message(&body).unwrap_or_else(|| "Email verified".to_string()))
    }
}
