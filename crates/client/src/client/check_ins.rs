//! Check-in API client methods

use confab_core::Paginated;

use super::ConfabClient;
use crate::error::ClientError;
use crate::types::{CheckIn, CheckInCount, CheckInFilters};

impl ConfabClient {
    /// Number of attendees checked in today
    pub async fn today_check_in_count(&self) -> Result<CheckInCount, ClientError> {
        let req = self.request(reqwest::Method::GET, "/check-in/today-count");
        self.execute(req).await
    }

    /// List check-ins matching the given filters
    pub async fn list_check_ins(
        &self,
        filters: &CheckInFilters,
    ) -> Result<Paginated<CheckIn>, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/check-in")
            .query(filters);
        self.execute(req).await
    }
}
