use reqwest::{Method, StatusCode};

use crate::{
    reply::{self, ReplyKey},
    spotify::{ApiError, ApiResponse, MusicClient},
    types::{ContentRef, CurrentPlayback, DevicesResponse, PlayRequest},
    warning,
};

/// Result of looking for a device to play on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceLookup {
    Found(String),
    /// The account has no device that could take playback.
    Empty,
    /// The device listing itself was refused.
    Failed(StatusCode),
}

/// Result of [`MusicClient::play_content`].
#[derive(Debug, Clone)]
pub enum PlaybackOutcome {
    Issued(ApiResponse),
    NoDevice,
    DeviceLookupFailed(StatusCode),
}

impl PlaybackOutcome {
    pub fn reply_key(&self) -> ReplyKey {
        match self {
            PlaybackOutcome::Issued(response) => reply::classify_outcome(response.status),
            PlaybackOutcome::NoDevice => ReplyKey::NoActiveDevice,
            PlaybackOutcome::DeviceLookupFailed(status) => reply::classify_outcome(*status),
        }
    }
}

/// What the player is doing right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NowPlaying {
    /// Id of the item currently loaded in the player.
    Item(String),
    Nothing,
    Failed(StatusCode),
}

impl MusicClient {
    /// Raw `GET /me/player/devices`.
    pub async fn devices(&self) -> Result<ApiResponse, ApiError> {
        self.send(self.request(Method::GET, "/me/player/devices"))
            .await
    }

    /// Picks the first device that has an id.
    pub async fn list_devices(&self) -> Result<DeviceLookup, ApiError> {
        let response = self.devices().await?;
        if !response.is_success() {
            warning!("Device listing failed with {}", response.status);
            return Ok(DeviceLookup::Failed(response.status));
        }

        let devices = response.json::<DevicesResponse>().unwrap_or_default();
        Ok(devices
            .devices
            .into_iter()
            .find_map(|d| d.id)
            .map(DeviceLookup::Found)
            .unwrap_or(DeviceLookup::Empty))
    }

    /// Starts `content` from its first item on the given device.
    pub async fn play(
        &self,
        device_id: &str,
        content: &ContentRef,
    ) -> Result<ApiResponse, ApiError> {
        let body = PlayRequest::from(content);
        self.send(
            self.request(Method::PUT, "/me/player/play")
                .query(&[("device_id", device_id)])
                .json(&body),
        )
        .await
    }

    /// Looks up a device and plays `content` on it. The play endpoint is not
    /// called when no device is available.
    pub async fn play_content(&self, content: &ContentRef) -> Result<PlaybackOutcome, ApiError> {
        match self.list_devices().await? {
            DeviceLookup::Found(device_id) => {
                let response = self.play(&device_id, content).await?;
                Ok(PlaybackOutcome::Issued(response))
            }
            DeviceLookup::Empty => Ok(PlaybackOutcome::NoDevice),
            DeviceLookup::Failed(status) => Ok(PlaybackOutcome::DeviceLookupFailed(status)),
        }
    }

    /// `GET /me/player`. An empty body (204) or a state without an item id is
    /// [`NowPlaying::Nothing`].
    pub async fn current_playback(&self) -> Result<NowPlaying, ApiError> {
        let response = self.send(self.request(Method::GET, "/me/player")).await?;
        if !response.is_success() {
            return Ok(NowPlaying::Failed(response.status));
        }

        Ok(response
            .json::<CurrentPlayback>()
            .and_then(|state| state.item)
            .and_then(|item| item.id)
            .map(NowPlaying::Item)
            .unwrap_or(NowPlaying::Nothing))
    }
}
