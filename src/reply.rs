//! Reply keys and the status code classification.
//!
//! Reply keys are symbolic names the dialogue manager resolves to localized text.
//! Handlers never build user-facing sentences for upstream failures themselves;
//! they map the last HTTP status to one of these keys.

use std::fmt;

use reqwest::StatusCode;

use crate::{types::BotMessage, warning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyKey {
    /// Acknowledge before the slow search/play sequence.
    Second,
    SearchError,
    PremiumRequired,
    NoActiveDevice,
    EnjoyMusic,
    ClarifyError,
    AddTrackOk,
    AddTrackError,
}

impl ReplyKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyKey::Second => "utter_second",
            ReplyKey::SearchError => "utter_search_error",
            ReplyKey::PremiumRequired => "utter_spotify_premium_error",
            ReplyKey::NoActiveDevice => "utter_spotify_no_active_error",
            ReplyKey::EnjoyMusic => "utter_enjoy_music",
            ReplyKey::ClarifyError => "utter_clarify_error",
            ReplyKey::AddTrackOk => "utter_add_track_ok",
            ReplyKey::AddTrackError => "utter_add_track_error",
        }
    }
}

impl fmt::Display for ReplyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message sent back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Response(ReplyKey),
    Text(String),
}

impl From<ReplyKey> for Reply {
    fn from(key: ReplyKey) -> Self {
        Reply::Response(key)
    }
}

impl From<&Reply> for BotMessage {
    fn from(reply: &Reply) -> Self {
        match reply {
            Reply::Response(key) => BotMessage {
                response: Some(key.as_str().to_string()),
                text: None,
            },
            Reply::Text(text) => BotMessage {
                response: None,
                text: Some(text.clone()),
            },
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Response(key) => write!(f, "{}", key),
            Reply::Text(text) => f.write_str(text),
        }
    }
}

/// Maps the status of the last playback call to a reply key.
///
/// 400 means the search produced something unplayable, 403 a free account,
/// 404 no active device. Every other status, including unexpected 5xx,
/// maps to [`ReplyKey::EnjoyMusic`].
pub fn classify_status(status: StatusCode) -> ReplyKey {
    match status.as_u16() {
        400 => ReplyKey::SearchError,
        403 => ReplyKey::PremiumRequired,
        404 => ReplyKey::NoActiveDevice,
        _ => ReplyKey::EnjoyMusic,
    }
}

/// Same as [`classify_status`], but reports statuses that are neither a success
/// nor one of the mapped client errors, since those end up as a success reply.
pub fn classify_outcome(status: StatusCode) -> ReplyKey {
    let key = classify_status(status);
    if key == ReplyKey::EnjoyMusic && !status.is_success() {
        warning!(
            "Spotify answered {} which has no dedicated reply, reporting success",
            status
        );
    }
    key
}
