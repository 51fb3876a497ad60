//! Location API client methods

use super::ConfabClient;
use crate::error::ClientError;
use crate::types::{CreateLocation, Location, UpdateLocation};

impl ConfabClient {
    /// List all locations
    pub async fn list_locations(&self) -> Result<Vec<Location>, ClientError> {
        let req = self.request(reqwest::Method::GET, "/location");
        self.execute(req).await
    }

    /// Fetch a single location
    pub async fn location(&self, id: i64) -> Result<Location, ClientError> {
        let req = self.request(reqwest::Method::GET, &format!("/location/{id}"));
        self.execute(req).await
    }

    /// Create a location
    pub async fn create_location(
        &self,
        location: &CreateLocation,
    ) -> Result<Location, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/admin/location")
            .json(location);
        self.execute(req).await
    }

    /// Update a location
    pub async fn update_location(
        &self,
        id: i64,
        update: &UpdateLocation,
    ) -> Result<Location, ClientError> {
        let req = self
            .request(reqwest::Method::PUT, &format!("/admin/location/{id}"))
            .json(update);
        self.execute(req).await
    }

    /// Delete a location
    pub async fn delete_location(&self, id: i64) -> Result<(), ClientError> {
        let req = self.request(reqwest::Method::DELETE, &format!("/admin/location/{id}"));
        self.execute_empty(req).await
    }
}
