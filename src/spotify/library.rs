use reqwest::Method;

use crate::spotify::{ApiError, ApiResponse, MusicClient};

impl MusicClient {
    /// Adds a track to the user's saved tracks.
    pub async fn save_track(&self, track_id: &str) -> Result<ApiResponse, ApiError> {
        self.send(
            self.request(Method::PUT, "/me/tracks")
                .query(&[("ids", track_id)]),
        )
        .await
    }
}
