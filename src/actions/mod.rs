//! # Actions Module
//!
//! One handler per intent the dialogue manager can route here. Every handler
//! follows the same shape:
//!
//! 1. obtain a valid access token from the shared [`TokenManager`]
//! 2. extract the content name from the utterance ([`crate::extract`])
//! 3. acknowledge with `utter_second`, since search and playback take a while
//! 4. search, play, and map the last status to a reply key
//!
//! Handlers collect their messages in a [`Dispatcher`] and return the events
//! (slot updates) the dialogue manager should apply.
//!
//! | Action name                   | Handler                  |
//! |-------------------------------|--------------------------|
//! | `action_play_music`           | [`play_music`]           |
//! | `action_play_custom_playlist` | [`play_playlist`]        |
//! | `action_play_content`         | [`play_content`]         |
//! | `action_add_current_track`    | [`add_current_track`]    |
//! | `action_get_custom_playlist`  | [`featured_playlists`]   |

use std::{fmt, str::FromStr, sync::Arc};

use reqwest::Client;

use crate::{
    Res,
    config::Settings,
    management::TokenManager,
    reply::{Reply, ReplyKey},
    spotify::MusicClient,
    types::{ActionResponse, BotMessage, Event, Utterance},
    utils,
};

pub mod add_current_track;
pub mod featured_playlists;
pub mod play_content;
pub mod play_music;
pub mod play_playlist;

/// Slot telling the dialogue manager that playlists were just listed.
pub const PLAYLISTS_PRESENTED_SLOT: &str = "is_get_playlist";

pub const NOTHING_PLAYING_TEXT: &str = "Nothing is playing right now";
pub const FEATURED_PLAYLISTS_HEADER: &str = "Here are the featured playlists:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    PlayMusic,
    AddCurrentTrack,
    PlayCustomPlaylist,
    GetCustomPlaylist,
    PlayContent,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::PlayMusic,
        ActionKind::AddCurrentTrack,
        ActionKind::PlayCustomPlaylist,
        ActionKind::GetCustomPlaylist,
        ActionKind::PlayContent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::PlayMusic => "action_play_music",
            ActionKind::AddCurrentTrack => "action_add_current_track",
            ActionKind::PlayCustomPlaylist => "action_play_custom_playlist",
            ActionKind::GetCustomPlaylist => "action_get_custom_playlist",
            ActionKind::PlayContent => "action_play_content",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("No registered action found for name '{}'.", s))
    }
}

/// Collects the messages an action sends, in order.
#[derive(Debug, Default)]
pub struct Dispatcher {
    replies: Vec<Reply>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn utter(&mut self, key: ReplyKey) {
        self.replies.push(Reply::Response(key));
    }

    pub fn utter_text(&mut self, text: impl Into<String>) {
        self.replies.push(Reply::Text(text.into()));
    }

    pub fn replies(&self) -> &[Reply] {
        &self.replies
    }
}

/// Everything one action invocation produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionOutput {
    pub replies: Vec<Reply>,
    pub events: Vec<Event>,
}

impl From<ActionOutput> for ActionResponse {
    fn from(output: ActionOutput) -> Self {
        ActionResponse {
            events: output.events,
            responses: output.replies.iter().map(BotMessage::from).collect(),
        }
    }
}

/// Shared dependencies of all handlers.
#[derive(Clone)]
pub struct ActionContext {
    pub http: Client,
    pub tokens: Arc<TokenManager>,
    pub api_url: String,
    pub market: String,
}

impl ActionContext {
    /// Builds the HTTP client (with the configured timeout) and the token cache.
    pub fn new(settings: &Settings) -> Res<Self> {
        let http = utils::build_http_client(settings.http_timeout)?;
        let tokens = Arc::new(TokenManager::new(http.clone(), settings));
        Ok(Self::from_parts(http, tokens, settings))
    }

    pub fn from_parts(http: Client, tokens: Arc<TokenManager>, settings: &Settings) -> Self {
        ActionContext {
            http,
            tokens,
            api_url: settings.api_url.clone(),
            market: settings.market.clone(),
        }
    }

    /// A client bound to a currently valid access token.
    pub async fn music_client(&self) -> Res<MusicClient> {
        let token = self.tokens.get_access_token().await?;
        Ok(MusicClient::new(self.http.clone(), &self.api_url, token))
    }
}

/// Runs one action to completion.
///
/// Upstream failures that have a reply key end up as messages in the output.
/// Token and transport failures are returned as errors.
pub async fn run(
    kind: ActionKind,
    ctx: &ActionContext,
    utterance: &Utterance,
) -> Res<ActionOutput> {
    let mut dispatcher = Dispatcher::new();
    let events = match kind {
        ActionKind::PlayMusic => play_music::run(ctx, utterance, &mut dispatcher).await?,
        ActionKind::AddCurrentTrack => {
            add_current_track::run(ctx, utterance, &mut dispatcher).await?
        }
        ActionKind::PlayCustomPlaylist => {
            play_playlist::run(ctx, utterance, &mut dispatcher).await?
        }
        ActionKind::GetCustomPlaylist => {
            featured_playlists::run(ctx, utterance, &mut dispatcher).await?
        }
        ActionKind::PlayContent => play_content::run(ctx, utterance, &mut dispatcher).await?,
    };

    Ok(ActionOutput {
        replies: dispatcher.replies,
        events,
    })
}
