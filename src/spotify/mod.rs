//! # Spotify Integration Module
//!
//! This module wraps the parts of the Spotify Web API the chat actions need:
//! device discovery, search, playback, the current playback state, saved tracks
//! and featured playlists.
//!
//! ## Architecture
//!
//! ```text
//! Intent handlers (actions)
//!          ↓
//! MusicClient
//!     ├── player  (devices, play, current playback)
//!     ├── search  (track / playlist lookup)
//!     ├── library (saved tracks)
//!     └── browse  (featured playlists)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! A [`MusicClient`] is built per action invocation around an access token handed
//! out by [`crate::management::TokenManager`]; it never refreshes tokens itself.
//!
//! ## Error Handling
//!
//! HTTP statuses are not errors here. Every call returns an [`ApiResponse`] with
//! the status and the parsed body and the caller decides what a 404 means.
//! Only transport failures (connection refused, timeout) surface as [`ApiError`].
//!
//! ## API Coverage
//!
//! - `GET /me/player/devices`
//! - `PUT /me/player/play?device_id={id}`
//! - `GET /me/player`
//! - `GET /search?q={q}&type={track|playlist}&limit=1`
//! - `PUT /me/tracks?ids={id}`
//! - `GET /browse/featured-playlists?limit={n}&country={market}`

use std::fmt;

use reqwest::{
    Client, Method, RequestBuilder, StatusCode,
    header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::utils;

pub mod browse;
pub mod library;
pub mod player;
pub mod search;

pub use player::{DeviceLookup, NowPlaying, PlaybackOutcome};

#[derive(Debug)]
pub enum ApiError {
    RequestError(reqwest::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestError(e) => write!(f, "spotify request failed: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::RequestError(err)
    }
}

/// Status and body of one Web API call.
///
/// Empty bodies (204 No Content) are `Value::Null`, bodies that are not JSON
/// are kept as a string.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    async fn read(res: reqwest::Response) -> Result<Self, ApiError> {
        let status = res.status();
        let text = res.text().await?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        Ok(ApiResponse { status, body })
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Deserializes the body, `None` if it does not have the expected shape.
    pub fn json<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_value(self.body.clone()).ok()
    }
}

/// Spotify Web API client bound to one access token.
#[derive(Clone)]
pub struct MusicClient {
    http: Client,
    api_url: String,
    token: String,
}

impl MusicClient {
    pub fn new(http: Client, api_url: &str, token: String) -> Self {
        MusicClient {
            http,
            api_url: utils::trim_trailing_slash(api_url),
            token,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.api_url, path))
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let res = request.send().await?;
        ApiResponse::read(res).await
    }
}
