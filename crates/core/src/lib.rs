//! Core types shared by the Confab admin client crates
//!
//! This crate holds the session model (the client-side record of the
//! current authentication state), the pluggable stores that persist it,
//! and the wire-level primitives every API response shares: the
//! pagination envelope and the backend's standard error envelope.

pub mod error;
pub mod session;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
pub use types::{AdminRole, ErrorEnvelope, MediaRef, PageMeta, Paginated, SortOrder, UserProfile};
