mod common;

use axum::http::Method;
use serde_json::{Value, json};
use spotact::reply::ReplyKey;
use spotact::spotify::{DeviceLookup, NowPlaying, PlaybackOutcome};
use spotact::types::{ContentKind, ContentRef};

use common::{FakeSpotify, TEST_TOKEN, devices, track_page};

#[tokio::test]
async fn test_list_devices_returns_first_id() {
    let fake = FakeSpotify::start().await;
    fake.on(Method::GET, "/v1/me/player/devices", 200, devices(&["dev-1", "dev-2"]));

    let lookup = fake.music_client().list_devices().await.unwrap();
    assert_eq!(lookup, DeviceLookup::Found("dev-1".to_string()));

    let calls = fake.requests_to(Method::GET, "/v1/me/player/devices");
    assert_eq!(
        calls[0].authorization.as_deref(),
        Some(format!("Bearer {}", TEST_TOKEN).as_str())
    );
}

#[tokio::test]
async fn test_list_devices_separates_empty_from_failed() {
    let fake = FakeSpotify::start().await;
    fake.on(Method::GET, "/v1/me/player/devices", 200, json!({"devices": []}));
    assert_eq!(
        fake.music_client().list_devices().await.unwrap(),
        DeviceLookup::Empty
    );

    let fake = FakeSpotify::start().await;
    fake.on(
        Method::GET,
        "/v1/me/player/devices",
        401,
        json!({"error": {"status": 401, "message": "expired"}}),
    );
    assert_eq!(
        fake.music_client().list_devices().await.unwrap(),
        DeviceLookup::Failed(reqwest::StatusCode::UNAUTHORIZED)
    );
}

#[tokio::test]
async fn test_play_content_without_device_skips_play() {
    let fake = FakeSpotify::start().await;
    fake.on(Method::GET, "/v1/me/player/devices", 200, json!({"devices": []}));
    fake.on(Method::PUT, "/v1/me/player/play", 204, Value::Null);

    let outcome = fake
        .music_client()
        .play_content(&ContentRef::Tracks(vec!["spotify:track:123".to_string()]))
        .await
        .unwrap();

    assert!(matches!(outcome, PlaybackOutcome::NoDevice));
    assert_eq!(outcome.reply_key(), ReplyKey::NoActiveDevice);
    assert_eq!(fake.count(Method::PUT, "/v1/me/player/play"), 0);
}

#[tokio::test]
async fn test_play_tracks_body() {
    let fake = FakeSpotify::start().await;
    fake.on(Method::GET, "/v1/me/player/devices", 200, devices(&["dev-1"]));
    fake.on(Method::PUT, "/v1/me/player/play", 204, Value::Null);

    let outcome = fake
        .music_client()
        .play_content(&ContentRef::Tracks(vec!["spotify:track:123".to_string()]))
        .await
        .unwrap();
    assert_eq!(outcome.reply_key(), ReplyKey::EnjoyMusic);

    let calls = fake.requests_to(Method::PUT, "/v1/me/player/play");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].query, "device_id=dev-1");
    let body: Value = serde_json::from_str(&calls[0].body).unwrap();
    assert_eq!(
        body,
        json!({"uris": ["spotify:track:123"], "offset": {"position": 0}, "position_ms": 0})
    );
}

#[tokio::test]
async fn test_play_context_body() {
    let fake = FakeSpotify::start().await;
    fake.on(Method::GET, "/v1/me/player/devices", 200, devices(&["dev-1"]));
    fake.on(Method::PUT, "/v1/me/player/play", 403, json!({"error": {"status": 403}}));

    let outcome = fake
        .music_client()
        .play_content(&ContentRef::Context("spotify:playlist:42".to_string()))
        .await
        .unwrap();
    assert_eq!(outcome.reply_key(), ReplyKey::PremiumRequired);

    let calls = fake.requests_to(Method::PUT, "/v1/me/player/play");
    let body: Value = serde_json::from_str(&calls[0].body).unwrap();
    assert_eq!(
        body,
        json!({"context_uri": "spotify:playlist:42", "offset": {"position": 0}, "position_ms": 0})
    );
}

#[tokio::test]
async fn test_search_query_and_first_uri() {
    let fake = FakeSpotify::start().await;
    fake.on(Method::GET, "/v1/search", 200, track_page(&["spotify:track:123"]));

    let response = fake
        .music_client()
        .search("imagine dragons", ContentKind::Track)
        .await
        .unwrap();
    assert_eq!(
        response.first_uri(ContentKind::Track).as_deref(),
        Some("spotify:track:123")
    );
    assert_eq!(response.first_uri(ContentKind::Playlist), None);

    let calls = fake.requests_to(Method::GET, "/v1/search");
    assert_eq!(calls[0].query, "q=imagine+dragons&type=track&limit=1");
}

#[tokio::test]
async fn test_first_uri_skips_null_playlist_items() {
    let fake = FakeSpotify::start().await;
    fake.on(
        Method::GET,
        "/v1/search",
        200,
        json!({"playlists": {"items": [null, {"id": "p", "name": "Chill", "uri": "spotify:playlist:7"}]}}),
    );

    let response = fake
        .music_client()
        .search("chill", ContentKind::Playlist)
        .await
        .unwrap();
    assert_eq!(
        response.first_uri(ContentKind::Playlist).as_deref(),
        Some("spotify:playlist:7")
    );
}

#[tokio::test]
async fn test_current_playback_states() {
    let fake = FakeSpotify::start().await;
    fake.on(
        Method::GET,
        "/v1/me/player",
        200,
        json!({"is_playing": true, "item": {"id": "track-9", "name": "x", "uri": "spotify:track:track-9"}}),
    );
    assert_eq!(
        fake.music_client().current_playback().await.unwrap(),
        NowPlaying::Item("track-9".to_string())
    );

    let fake = FakeSpotify::start().await;
    fake.on(Method::GET, "/v1/me/player", 204, Value::Null);
    assert_eq!(
        fake.music_client().current_playback().await.unwrap(),
        NowPlaying::Nothing
    );

    let fake = FakeSpotify::start().await;
    fake.on(Method::GET, "/v1/me/player", 200, json!({"is_playing": false, "item": null}));
    assert_eq!(
        fake.music_client().current_playback().await.unwrap(),
        NowPlaying::Nothing
    );

    let fake = FakeSpotify::start().await;
    fake.on(Method::GET, "/v1/me/player", 401, json!({"error": {"status": 401}}));
    assert_eq!(
        fake.music_client().current_playback().await.unwrap(),
        NowPlaying::Failed(reqwest::StatusCode::UNAUTHORIZED)
    );
}

#[tokio::test]
async fn test_featured_playlists_query() {
    let fake = FakeSpotify::start().await;
    fake.on(
        Method::GET,
        "/v1/browse/featured-playlists",
        200,
        json!({"playlists": {"items": []}}),
    );

    fake.music_client()
        .featured_playlists(5, "RU")
        .await
        .unwrap();
    let calls = fake.requests_to(Method::GET, "/v1/browse/featured-playlists");
    assert_eq!(calls[0].query, "limit=5&country=RU");
}

#[tokio::test]
async fn test_transport_failure_is_an_error() {
    let fake = FakeSpotify::start().await;
    let settings = fake.settings();
    let http = spotact::utils::build_http_client(settings.http_timeout).unwrap();
    // nothing listens on port 1
    let music = spotact::spotify::MusicClient::new(http, "http://127.0.0.1:1/v1", "t".to_string());

    assert!(music.list_devices().await.is_err());
}
