use crate::{
    Res,
    actions::{ActionContext, Dispatcher},
    extract::{ContentExtractor, EntitySpan},
    reply::{self, ReplyKey},
    spotify::{ApiError, MusicClient},
    types::{ContentKind, ContentRef, Event, Utterance},
    warning,
};

/// `action_play_custom_playlist`: "play playlist <name>".
pub async fn run(
    ctx: &ActionContext,
    utterance: &Utterance,
    dispatcher: &mut Dispatcher,
) -> Res<Vec<Event>> {
    let music = ctx.music_client().await?;

    let Some(name) = EntitySpan::after_end().extract(utterance) else {
        dispatcher.utter(ReplyKey::ClarifyError);
        return Ok(vec![]);
    };

    dispatcher.utter(ReplyKey::Second);
    let key = play_playlist_or_track(&music, &name).await?;
    dispatcher.utter(key);
    Ok(vec![])
}

/// Plays `name` as a playlist, or as a track when no playlist matches.
///
/// An empty playlist page leads to exactly one track search. A failed search
/// is classified by its status without further searches.
pub async fn play_playlist_or_track(music: &MusicClient, name: &str) -> Result<ReplyKey, ApiError> {
    let response = music.search(name, ContentKind::Playlist).await?;
    if !response.is_success() {
        return Ok(reply::classify_outcome(response.status));
    }

    if let Some(uri) = response.first_uri(ContentKind::Playlist) {
        let outcome = music.play_content(&ContentRef::Context(uri)).await?;
        return Ok(outcome.reply_key());
    }

    warning!("No playlist found for '{}', searching tracks", name);
    let response = music.search(name, ContentKind::Track).await?;
    if !response.is_success() {
        return Ok(reply::classify_outcome(response.status));
    }

    match response.first_uri(ContentKind::Track) {
        Some(uri) => {
            let outcome = music.play_content(&ContentRef::Tracks(vec![uri])).await?;
            Ok(outcome.reply_key())
        }
        None => Ok(ReplyKey::SearchError),
    }
}
