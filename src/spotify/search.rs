use reqwest::Method;

use crate::{
    spotify::{ApiError, ApiResponse, MusicClient},
    types::{ContentKind, SearchResponse},
};

impl MusicClient {
    /// Searches for one item of the given kind.
    pub async fn search(&self, query: &str, kind: ContentKind) -> Result<ApiResponse, ApiError> {
        self.send(self.request(Method::GET, "/search").query(&[
            ("q", query),
            ("type", kind.as_str()),
            ("limit", "1"),
        ]))
        .await
    }
}

impl ApiResponse {
    /// Uri of the first hit of a search response, `None` for an empty page,
    /// a failed call or an unexpected body.
    pub fn first_uri(&self, kind: ContentKind) -> Option<String> {
        if !self.is_success() {
            return None;
        }
        let search = self.json::<SearchResponse>()?;
        let page = match kind {
            ContentKind::Track => search.tracks?,
            ContentKind::Playlist => search.playlists?,
        };
        page.first()
            .map(|item| item.uri.clone())
            .filter(|uri| !uri.is_empty())
    }
}
