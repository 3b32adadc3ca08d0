use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Tabled)]
pub struct DeviceTableRow {
    pub name: String,
    pub kind: String,
    pub active: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevicesResponse {
    #[serde(default)]
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uri: String,
}

/// A page of search or browse results.
///
/// Spotify occasionally returns `null` entries inside playlist pages, so items
/// are optional and skipped when reading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub items: Vec<Option<Item>>,
}

impl Page {
    pub fn first(&self) -> Option<&Item> {
        self.items.iter().flatten().next()
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().flatten().map(|i| i.name.clone()).collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<Page>,
    pub playlists: Option<Page>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentPlayback {
    pub item: Option<Item>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturedPlaylistsResponse {
    #[serde(default)]
    pub playlists: Page,
}

/// What a search is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Track,
    Playlist,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Track => "track",
            ContentKind::Playlist => "playlist",
        }
    }
}

/// Something playback can be started with: a list of track URIs or a single
/// context (playlist, album) URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRef {
    Tracks(Vec<String>),
    Context(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayOffset {
    pub position: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_uri: Option<String>,
    pub offset: PlayOffset,
    pub position_ms: u64,
}

impl From<&ContentRef> for PlayRequest {
    fn from(content: &ContentRef) -> Self {
        let (uris, context_uri) = match content {
            ContentRef::Tracks(uris) => (Some(uris.clone()), None),
            ContentRef::Context(uri) => (None, Some(uri.clone())),
        };
        PlayRequest {
            uris,
            context_uri,
            offset: PlayOffset { position: 0 },
            position_ms: 0,
        }
    }
}

/// A tagged span of the utterance. Offsets count characters, not bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    pub entity: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Utterance {
    pub intent: Option<String>,
    pub entities: Vec<Entity>,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntentRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatestMessage {
    pub text: Option<String>,
    pub intent: Option<IntentRef>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl From<LatestMessage> for Utterance {
    fn from(message: LatestMessage) -> Self {
        Utterance {
            intent: message.intent.and_then(|i| i.name),
            entities: message.entities,
            text: message.text.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerState {
    pub sender_id: Option<String>,
    #[serde(default)]
    pub latest_message: LatestMessage,
}

/// Body of a webhook call from the dialogue manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionCall {
    pub next_action: String,
    pub sender_id: Option<String>,
    #[serde(default)]
    pub tracker: TrackerState,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event")]
pub enum Event {
    #[serde(rename = "slot")]
    SlotSet {
        name: String,
        value: Value,
        timestamp: Option<f64>,
    },
}

impl Event {
    pub fn slot(name: &str, value: Value) -> Self {
        Event::SlotSet {
            name: name.to_string(),
            value,
            timestamp: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BotMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    pub events: Vec<Event>,
    pub responses: Vec<BotMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionError {
    pub error: String,
    pub action_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionInfo {
    pub name: String,
}
