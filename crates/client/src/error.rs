//! Client error types

use confab_core::ErrorEnvelope;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed: the token refresh was rejected, or the
    /// retried request was still unauthorized
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Insufficient permissions for the requested operation
    #[error("Insufficient permissions: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The server answered 2xx but the body did not match the
    /// expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Build an error from a non-2xx response, extracting the message
    /// from the backend's error envelope when one is present
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let message = match response.text().await {
            Ok(body) => match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => envelope.message,
                Err(_) if !body.is_empty() => body,
                Err(_) => status.to_string(),
            },
            Err(_) => status.to_string(),
        };
        Self::from_status(status, message)
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_to_variant() {
        let err = ClientError::from_status(reqwest::StatusCode::FORBIDDEN, "no".into());
        assert!(matches!(err, ClientError::Forbidden(_)));

        let err = ClientError::from_status(reqwest::StatusCode::BAD_GATEWAY, "down".into());
        assert!(matches!(err, ClientError::ServerError { status: 502, .. }));
    }
}
