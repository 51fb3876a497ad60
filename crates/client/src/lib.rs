//! HTTP client for the Confab event-management admin API
//!
//! The client attaches the session's bearer token to every request,
//! recovers from an expired access token with a single coalesced
//! refresh-and-retry, and terminates the session on unrecoverable
//! authorization failures. Typed methods cover the admin surface:
//! OTP sign-in, events, sponsors, sessions, tracks, locations, users,
//! check-ins, and media upload.
//!
//! ```no_run
//! use confab_client::{ClientSettings, ConfabClient};
//!
//! # async fn run() -> Result<(), confab_client::ClientError> {
//! let settings = ClientSettings::from_env()?;
//! let client = ConfabClient::from_settings(&settings)?;
//! let events = client.list_events(1, 10).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod settings;
pub mod types;

pub use client::{ConfabClient, ConfabClientBuilder, SessionExpiredHook};
pub use error::ClientError;
pub use settings::ClientSettings;

// Re-export the session model so callers don't need a direct
// confab-core dependency for the common cases.
pub use confab_core::{
    FileSessionStore, MemorySessionStore, Paginated, Session, SessionStore, UserProfile,
};
