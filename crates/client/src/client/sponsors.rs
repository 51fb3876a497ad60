//! Sponsor API client methods

use super::ConfabClient;
use crate::error::ClientError;
use crate::types::{CreateSponsor, Sponsor, UpdateSponsor};

impl ConfabClient {
    /// List all sponsors of the current event
    pub async fn list_sponsors(&self) -> Result<Vec<Sponsor>, ClientError> {
        let req = self.request(reqwest::Method::GET, "/sponsor");
        self.execute(req).await
    }

    /// Fetch a single sponsor
    pub async fn sponsor(&self, id: i64) -> Result<Sponsor, ClientError> {
        let req = self.request(reqwest::Method::GET, &format!("/sponsor/{id}"));
        self.execute(req).await
    }

    /// Create a sponsor
    pub async fn create_sponsor(&self, sponsor: &CreateSponsor) -> Result<Sponsor, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/admin/sponsor")
            .json(sponsor);
        self.execute(req).await
    }

    /// Update a sponsor
    pub async fn update_sponsor(
        &self,
        id: i64,
        update: &UpdateSponsor,
    ) -> Result<Sponsor, ClientError> {
        let req = self
            .request(reqwest::Method::PUT, &format!("/admin/sponsor/{id}"))
            .json(update);
        self.execute(req).await
    }

    /// Delete a sponsor
    pub async fn delete_sponsor(&self, id: i64) -> Result<(), ClientError> {
        let req = self.request(reqwest::Method::DELETE, &format!("/admin/sponsor/{id}"));
        self.execute_empty(req).await
    }

    /// Replace a sponsor's logo with an uploaded image
    pub async fn upload_sponsor_logo(
        &self,
        id: i64,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<Sponsor, ClientError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("logo", part);
        let req = self
            .request(reqwest::Method::PATCH, &format!("/sponsors/{id}/logo"))
            .multipart(form);
        self.execute(req).await
    }
}
