//! User administration API client methods

use confab_core::Paginated;

use super::ConfabClient;
use crate::error::ClientError;
use crate::types::ManagedUser;

impl ConfabClient {
    /// List platform users a page at a time
    pub async fn list_users(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Paginated<ManagedUser>, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/admin/user")
            .query(&[("page", page), ("limit", limit)]);
        self.execute(req).await
    }

    /// Fetch a single user
    pub async fn user(&self, id: &str) -> Result<ManagedUser, ClientError> {
        let req = self.request(reqwest::Method::GET, &format!("/admin/user/{id}"));
        self.execute(req).await
    }

    /// Bulk-import users from an uploaded CSV file
    pub async fn import_users(&self, file_name: String, csv: Vec<u8>) -> Result<(), ClientError> {
        let part = reqwest::multipart::Part::bytes(csv).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);
        let req = self
            .request(reqwest::Method::POST, "/admin/user/import")
            .multipart(form);
        self.execute_empty(req).await
    }
}
