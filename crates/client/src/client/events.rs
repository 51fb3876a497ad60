//! Event API client methods

use confab_core::Paginated;

use super::ConfabClient;
use crate::error::ClientError;
use crate::types::Event;

impl ConfabClient {
    /// List events a page at a time
    pub async fn list_events(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Paginated<Event>, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/events")
            .query(&[("page", page), ("limit", limit)]);
        self.execute(req).await
    }

    /// Fetch the event this deployment is serving
    pub async fn current_event(&self) -> Result<Event, ClientError> {
        let req = self.request(reqwest::Method::GET, "/event");
        self.execute(req).await
    }
}
