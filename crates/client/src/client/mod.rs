//! Confab admin API client
//!
//! [`ConfabClient`] wraps every outbound call with the session's
//! current bearer token and drives the single recovery path the
//! backend allows: a 401 triggers one refresh-token exchange and one
//! retry of the original request; a 403, a rejected refresh, or a
//! retry that still fails all terminate the session.

pub mod auth;
pub mod check_ins;
pub mod events;
pub mod locations;
pub mod media;
pub mod sessions;
pub mod sponsors;
pub mod tracks;
pub mod users;

use std::sync::Arc;
use std::time::Duration;

use confab_core::{MemorySessionStore, Session, SessionStore};
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::settings::ClientSettings;
use crate::types::{RefreshRequest, TokenGrant};

/// Callback fired when the session is terminated by an authorization
/// failure, so the embedding application can route back to its login
/// entry point
pub type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// Confab API client
#[derive(Clone)]
pub struct ConfabClient {
    http: Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    // Single-flight gate: concurrent 401s queue on this instead of
    // racing refresh calls that would revoke each other's tokens.
    refresh_gate: Arc<Mutex<()>>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl ConfabClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ConfabClientBuilder {
        ConfabClientBuilder::default()
    }

    /// Create a client from loaded settings
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ClientError> {
        Self::builder()
            .base_url(&settings.api_url)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(&settings.user_agent)
            .build()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Read the current session from the store
    pub async fn session(&self) -> Option<Session> {
        self.store.load().await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create a request builder for `path`; the bearer token is
    /// attached at dispatch time so a retry picks up a renewed token
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Execute a request and decode the JSON response body
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.dispatch(request).await?;
        Self::decode(response).await
    }

    /// Execute a request whose success response carries no body of
    /// interest
    pub async fn execute_empty(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), ClientError> {
        self.dispatch(request).await?;
        Ok(())
    }

    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        // Streaming bodies (multipart uploads) cannot be cloned, in
        // which case the request gets no second attempt.
        let retry = request.try_clone();
        let token = self.store.load().await.map(|s| s.access_token);
        let request = match &token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED => self.reauthorize_and_retry(retry, token.as_deref()).await,
            StatusCode::FORBIDDEN => {
                let err = ClientError::from_response(response).await;
                self.expire_session().await;
                Err(err)
            }
            _ => Err(ClientError::from_response(response).await),
        }
    }

    /// Refresh the token pair, then retry the original request exactly
    /// once. A retry that still fails terminates the session; a second
    /// refresh is never attempted.
    async fn reauthorize_and_retry(
        &self,
        retry: Option<reqwest::RequestBuilder>,
        stale_token: Option<&str>,
    ) -> Result<reqwest::Response, ClientError> {
        let fresh_token = self.refresh_access_token(stale_token).await?;

        let Some(retry) = retry else {
            return Err(ClientError::AuthenticationFailed(
                "request body cannot be replayed after a token refresh".into(),
            ));
        };

        let response = retry.bearer_auth(&fresh_token).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        warn!(%status, "request rejected again after token refresh");
        let err = ClientError::from_response(response).await;
        self.expire_session().await;
        Err(err)
    }

    /// Exchange the refresh token for a new pair, coalescing
    /// concurrent attempts behind one in-flight exchange
    async fn refresh_access_token(
        &self,
        stale_token: Option<&str>,
    ) -> Result<String, ClientError> {
        let _gate = self.refresh_gate.lock().await;

        let Some(current) = self.store.load().await else {
            return Err(ClientError::AuthenticationFailed(
                "no active session".into(),
            ));
        };
        if stale_token.is_some_and(|seen| current.access_token != seen) {
            // A sibling request finished the exchange while we waited.
            return Ok(current.access_token);
        }

        debug!("access token rejected, exchanging refresh token");
        let body = RefreshRequest {
            refresh_token: current.refresh_token.clone(),
        };
        let outcome = self
            .http
            .post(self.url("/auth/refresh"))
            .json(&body)
            .send()
            .await;

        let response = match outcome {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                warn!(status = %response.status(), "token refresh rejected");
                self.expire_session().await;
                return Err(ClientError::AuthenticationFailed(
                    "token refresh was rejected".into(),
                ));
            }
            Err(err) => {
                self.expire_session().await;
                return Err(ClientError::AuthenticationFailed(format!(
                    "token refresh failed: {err}"
                )));
            }
        };

        let grant: TokenGrant = match response.json().await {
            Ok(grant) => grant,
            Err(err) => {
                self.expire_session().await;
                return Err(ClientError::MalformedResponse(format!(
                    "refresh response: {err}"
                )));
            }
        };

        // The pair is replaced as a unit; the user profile carries over.
        let renewed = current.with_tokens(grant.access_token, grant.refresh_token);
        let fresh_token = renewed.access_token.clone();
        self.store.store(renewed).await;
        debug!("session tokens replaced");
        Ok(fresh_token)
    }

    async fn expire_session(&self) {
        warn!("terminating session after authorization failure");
        self.store.clear().await;
        if let Some(hook) = &self.on_session_expired {
            hook();
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| ClientError::MalformedResponse(err.to_string()))
    }
}

/// Builder for [`ConfabClient`]
#[derive(Default)]
pub struct ConfabClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    store: Option<Arc<dyn SessionStore>>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl ConfabClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Supply the session store; defaults to an in-memory store
    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Register a callback fired when an authorization failure
    /// terminates the session
    pub fn on_session_expired<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ConfabClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder =
                client_builder.user_agent(concat!("confab-client/", env!("CARGO_PKG_VERSION")));
        }

        let client = client_builder.build()?;

        Ok(ConfabClient {
            http: client,
            base_url,
            store: self
                .store
                .unwrap_or_else(|| Arc::new(MemorySessionStore::new())),
            refresh_gate: Arc::new(Mutex::new(())),
            on_session_expired: self.on_session_expired,
        })
    }
}
