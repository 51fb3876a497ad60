//! Track API client methods

use super::ConfabClient;
use crate::error::ClientError;
use crate::types::{CreateTrack, Track, UpdateTrack};

impl ConfabClient {
    /// List all tracks
    pub async fn list_tracks(&self) -> Result<Vec<Track>, ClientError> {
        let req = self.request(reqwest::Method::GET, "/track");
        self.execute(req).await
    }

    /// Fetch a single track
    pub async fn track(&self, id: i64) -> Result<Track, ClientError> {
        let req = self.request(reqwest::Method::GET, &format!("/track/{id}"));
        self.execute(req).await
    }

    /// Create a track
    pub async fn create_track(&self, track: &CreateTrack) -> Result<Track, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/admin/track")
            .json(track);
        self.execute(req).await
    }

    /// Update a track
    pub async fn update_track(&self, id: i64, update: &UpdateTrack) -> Result<Track, ClientError> {
        let req = self
            .request(reqwest::Method::PUT, &format!("/admin/track/{id}"))
            .json(update);
        self.execute(req).await
    }

    /// Delete a track
    pub async fn delete_track(&self, id: i64) -> Result<(), ClientError> {
        let req = self.request(reqwest::Method::DELETE, &format!("/admin/track/{id}"));
        self.execute_empty(req).await
    }

    /// Assign an existing session to a track
    pub async fn add_session_to_track(
        &self,
        track_id: i64,
        session_id: i64,
    ) -> Result<(), ClientError> {
        let req = self
            .request(
                reqwest::Method::POST,
                &format!("/admin/track/{track_id}/session/{session_id}"),
            )
            .json(&serde_json::json!({}));
        self.execute_empty(req).await
    }
}
