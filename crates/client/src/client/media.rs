//! Media upload API client methods

use super::ConfabClient;
use crate::error::ClientError;
use crate::types::{MediaKind, MediaUpload};

impl ConfabClient {
    /// Upload a media asset. The transport sets the multipart
    /// content type so the boundary is generated correctly.
    pub async fn upload_media(
        &self,
        file_name: String,
        bytes: Vec<u8>,
        kind: MediaKind,
    ) -> Result<MediaUpload, ClientError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("mediaType", kind.as_str());
        let req = self
            .request(reqwest::Method::POST, "/media/upload")
            .multipart(form);
        self.execute(req).await
    }
}
