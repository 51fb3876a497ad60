//! Client-side session state and the stores that persist it
//!
//! The session is the only mutable state the client carries: the
//! current access/refresh token pair and the signed-in user's profile.
//! A refresh replaces the whole [`Session`] value, so a store never
//! observes a half-updated token pair.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::CoreResult;
use crate::types::UserProfile;

/// Current authentication state: an opaque bearer token pair and the
/// profile of the user it was issued to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: Option<UserProfile>,
}

impl Session {
    /// Create a session from a freshly issued token pair
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        user: Option<UserProfile>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            user,
        }
    }

    /// Whether this session carries a usable bearer credential
    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// Replace the token pair, keeping the user profile
    pub fn with_tokens(
        self,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            user: self.user,
        }
    }
}

/// Storage seam for the session, injected into the request client so
/// tests can supply isolated fakes instead of process-wide state
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the current session, if one exists
    async fn load(&self) -> Option<Session>;

    /// Replace the stored session with a new one
    async fn store(&self, session: Session);

    /// Destroy the stored session
    async fn clear(&self);
}

/// In-memory session store, the default for a single-process client
#[derive(Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing session, e.g. one restored at startup
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: RwLock::new(Some(session)),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Option<Session> {
        self.inner.read().await.clone()
    }

    async fn store(&self, session: Session) {
        *self.inner.write().await = Some(session);
    }

    async fn clear(&self) {
        *self.inner.write().await = None;
    }
}

/// Session store persisted as a JSON file, so a session survives
/// process restarts the way the dashboard's cookies survived reloads
pub struct FileSessionStore {
    path: PathBuf,
    // Cached copy; the file is only read once, at construction.
    inner: RwLock<Option<Session>>,
}

impl FileSessionStore {
    /// Open a store backed by `path`, loading any previously saved
    /// session. A missing file starts the store empty, and a file
    /// that no longer parses is discarded; any other read failure is
    /// fatal.
    pub async fn open(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        let session = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(session) => Some(session),
                Err(err) => {
                    warn!(path = %path.display(), %err, "discarding unreadable session file");
                    None
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            inner: RwLock::new(session),
        })
    }

    async fn persist(&self, session: Option<&Session>) {
        let result = match session {
            Some(session) => match serde_json::to_vec_pretty(session) {
                Ok(bytes) => tokio::fs::write(&self.path, bytes).await,
                Err(err) => {
                    warn!(%err, "failed to serialize session");
                    return;
                }
            },
            None => match tokio::fs::remove_file(&self.path).await {
                Err(err) if err.kind() != std::io::ErrorKind::NotFound => Err(err),
                _ => Ok(()),
            },
        };
        if let Err(err) = result {
            warn!(path = %self.path.display(), %err, "failed to persist session");
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Option<Session> {
        self.inner.read().await.clone()
    }

    async fn store(&self, session: Session) {
        let mut guard = self.inner.write().await;
        self.persist(Some(&session)).await;
        *guard = Some(session);
        debug!("session persisted");
    }

    async fn clear(&self) {
        let mut guard = self.inner.write().await;
        self.persist(None).await;
        *guard = None;
        debug!("session cleared");
    }
}
