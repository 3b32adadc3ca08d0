use crate::{
    Res,
    actions::{ActionContext, Dispatcher},
    extract::{ContentExtractor, EntitySpan},
    reply::{self, ReplyKey},
    spotify::{ApiError, MusicClient},
    types::{ContentKind, ContentRef, Event, Utterance},
    warning,
};

/// `action_play_music`: "play song <name>".
///
/// The name is first taken after the tagged entity. When that finds nothing,
/// or nothing follows the entity, the search is repeated once with the text
/// starting at the entity, which covers utterances where the entity already is
/// the name.
pub async fn run(
    ctx: &ActionContext,
    utterance: &Utterance,
    dispatcher: &mut Dispatcher,
) -> Res<Vec<Event>> {
    let after_end = EntitySpan::after_end().extract(utterance);
    // identical names would only repeat the same search
    let from_start = if utterance.entities.is_empty() {
        None
    } else {
        EntitySpan::from_start()
            .extract(utterance)
            .filter(|name| Some(name) != after_end.as_ref())
    };

    if after_end.is_none() && from_start.is_none() {
        dispatcher.utter(ReplyKey::ClarifyError);
        return Ok(vec![]);
    }

    let music = ctx.music_client().await?;
    dispatcher.utter(ReplyKey::Second);

    let mut last_status = None;
    if let Some(track) = after_end {
        let response = music.search(&track, ContentKind::Track).await?;
        if let Some(uri) = response.first_uri(ContentKind::Track) {
            dispatcher.utter(play_track(&music, uri).await?);
            return Ok(vec![]);
        }
        last_status = Some(response.status);
    }

    if let Some(track) = from_start {
        if last_status.is_some() {
            warning!("No track found, retrying search with '{}'", track);
        }
        let response = music.search(&track, ContentKind::Track).await?;
        if let Some(uri) = response.first_uri(ContentKind::Track) {
            dispatcher.utter(play_track(&music, uri).await?);
            return Ok(vec![]);
        }
        last_status = Some(response.status);
    }

    let key = last_status.map_or(ReplyKey::SearchError, failed_search_key);
    dispatcher.utter(key);
    Ok(vec![])
}

async fn play_track(music: &MusicClient, uri: String) -> Result<ReplyKey, ApiError> {
    let outcome = music.play_content(&ContentRef::Tracks(vec![uri])).await?;
    Ok(outcome.reply_key())
}

/// An empty result page is a search error; a refused search keeps its status.
fn failed_search_key(status: reqwest::StatusCode) -> ReplyKey {
    if status.is_success() {
        ReplyKey::SearchError
    } else {
        reply::classify_outcome(status)
    }
}
