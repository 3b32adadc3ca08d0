use spotact::types::{ActionCall, ContentRef, Device, PlayRequest, Utterance};
use spotact::utils::*;

fn device(id: Option<&str>, name: &str, active: bool) -> Device {
    Device {
        id: id.map(str::to_string),
        name: name.to_string(),
        kind: "Speaker".to_string(),
        is_active: active,
    }
}

#[test]
fn test_encode_client_credential() {
    assert_eq!(
        encode_client_credential("client", "secret"),
        "Y2xpZW50OnNlY3JldA=="
    );
}

#[test]
fn test_parse_entity() {
    let entity = parse_entity("song:5:9").unwrap();
    assert_eq!(entity.entity, "song");
    assert_eq!(entity.start, Some(5));
    assert_eq!(entity.end, Some(9));

    // entity types may contain colons themselves
    let entity = parse_entity("ns:song:0:4").unwrap();
    assert_eq!(entity.entity, "ns:song");
}

#[test]
fn test_parse_entity_rejects_bad_input() {
    assert!(parse_entity("song").is_err());
    assert!(parse_entity("song:5").is_err());
    assert!(parse_entity("song:a:9").is_err());
    assert!(parse_entity("song:9:5").is_err());
}

#[test]
fn test_trim_trailing_slash() {
    assert_eq!(
        trim_trailing_slash("https://api.spotify.com/v1/"),
        "https://api.spotify.com/v1"
    );
    assert_eq!(
        trim_trailing_slash("https://api.spotify.com/v1"),
        "https://api.spotify.com/v1"
    );
}

#[test]
fn test_device_table_rows() {
    let rows = device_table_rows(&[
        device(Some("a1"), "Kitchen", true),
        device(None, "Restricted", false),
    ]);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Kitchen");
    assert_eq!(rows[0].active, "yes");
    assert_eq!(rows[0].id, "a1");
    assert_eq!(rows[1].active, "no");
    assert_eq!(rows[1].id, "");
}

#[test]
fn test_play_request_shapes() {
    let tracks = serde_json::to_value(PlayRequest::from(&ContentRef::Tracks(vec![
        "spotify:track:123".to_string(),
    ])))
    .unwrap();
    assert_eq!(
        tracks,
        serde_json::json!({"uris": ["spotify:track:123"], "offset": {"position": 0}, "position_ms": 0})
    );

    let context = serde_json::to_value(PlayRequest::from(&ContentRef::Context(
        "spotify:playlist:1".to_string(),
    )))
    .unwrap();
    assert!(context.get("uris").is_none());
    assert_eq!(context["context_uri"], "spotify:playlist:1");
}

#[test]
fn test_action_call_to_utterance() {
    let call: ActionCall = serde_json::from_value(serde_json::json!({
        "next_action": "action_play_music",
        "tracker": {
            "latest_message": {
                "text": "play song imagine",
                "intent": {"name": "play_music"},
                "entities": [{"entity": "song", "start": 5, "end": 9, "value": "song"}]
            }
        }
    }))
    .unwrap();

    let utterance = Utterance::from(call.tracker.latest_message);
    assert_eq!(utterance.intent.as_deref(), Some("play_music"));
    assert_eq!(utterance.text, "play song imagine");
    assert_eq!(utterance.entities.len(), 1);
    assert_eq!(utterance.entities[0].end, Some(9));
}
