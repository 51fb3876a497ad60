//! Session (agenda) API client methods

use confab_core::Paginated;

use super::ConfabClient;
use crate::error::ClientError;
use crate::types::{CreateEventSession, EventSession, SessionFilters};

impl ConfabClient {
    /// List an event's sessions, filtered and paginated
    pub async fn list_sessions(
        &self,
        event_id: i64,
        filters: &SessionFilters,
    ) -> Result<Paginated<EventSession>, ClientError> {
        let req = self
            .request(
                reqwest::Method::GET,
                &format!("/events/{event_id}/sessions"),
            )
            .query(filters);
        self.execute(req).await
    }

    /// Fetch a single session
    pub async fn session_detail(
        &self,
        event_id: i64,
        session_id: i64,
    ) -> Result<EventSession, ClientError> {
        let req = self.request(
            reqwest::Method::GET,
            &format!("/events/{event_id}/sessions/{session_id}"),
        );
        self.execute(req).await
    }

    /// Add a session to an event's agenda
    pub async fn create_session(
        &self,
        event_id: i64,
        session: &CreateEventSession,
    ) -> Result<EventSession, ClientError> {
        let req = self
            .request(
                reqwest::Method::POST,
                &format!("/events/{event_id}/sessions"),
            )
            .json(session);
        self.execute(req).await
    }
}
