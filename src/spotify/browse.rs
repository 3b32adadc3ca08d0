use reqwest::Method;

use crate::spotify::{ApiError, ApiResponse, MusicClient};

/// Number of featured playlists offered in one reply.
pub const FEATURED_PLAYLISTS_LIMIT: u32 = 5;

impl MusicClient {
    /// `GET /browse/featured-playlists` for one market.
    pub async fn featured_playlists(
        &self,
        limit: u32,
        country: &str,
    ) -> Result<ApiResponse, ApiError> {
        let limit = limit.to_string();
        self.send(
            self.request(Method::GET, "/browse/featured-playlists")
                .query(&[("limit", limit.as_str()), ("country", country)]),
        )
        .await
    }
}
