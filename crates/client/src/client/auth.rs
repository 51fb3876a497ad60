//! Authentication API client methods

use confab_core::{Session, UserProfile};

use super::ConfabClient;
use crate::error::ClientError;
use crate::types::{OtpRequested, RequestOtpParams, TokenGrant, VerifyOtpParams};

impl ConfabClient {
    /// Ask the backend to deliver a one-time passcode
    pub async fn request_otp(
        &self,
        params: &RequestOtpParams,
    ) -> Result<OtpRequested, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/request-otp")
            .json(params);
        self.execute(req).await
    }

    /// Exchange a delivered passcode for a session; on success the
    /// issued token pair and user profile are stored
    pub async fn verify_otp(&self, params: &VerifyOtpParams) -> Result<Session, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/verify-otp")
            .json(params);
        let grant: TokenGrant = self.execute(req).await?;

        if grant.access_token.is_empty() || grant.refresh_token.is_empty() {
            return Err(ClientError::MalformedResponse(
                "verify-otp response is missing the token pair".into(),
            ));
        }
        let Some(user) = grant.user else {
            return Err(ClientError::MalformedResponse(
                "verify-otp response is missing the user profile".into(),
            ));
        };

        let session = Session::new(grant.access_token, grant.refresh_token, Some(user));
        self.store.store(session.clone()).await;
        Ok(session)
    }

    /// Fetch the signed-in user's own profile
    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        let req = self.request(reqwest::Method::GET, "/user/me");
        self.execute(req).await
    }

    /// Discard the local session
    pub async fn sign_out(&self) {
        self.store.clear().await;
    }
}
