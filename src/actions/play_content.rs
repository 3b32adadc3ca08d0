use crate::{
    Res,
    actions::{ActionContext, Dispatcher, play_playlist},
    extract::{ContentExtractor, NamedEntity},
    reply::ReplyKey,
    types::{Event, Utterance},
};

/// `action_play_content`: free-form "play <something>".
///
/// Only a `name_content` entity is trusted; otherwise everything after the
/// first word is taken as the name. Playback goes through the same
/// playlist-then-track lookup as `action_play_custom_playlist`.
pub async fn run(
    ctx: &ActionContext,
    utterance: &Utterance,
    dispatcher: &mut Dispatcher,
) -> Res<Vec<Event>> {
    let music = ctx.music_client().await?;

    let Some(name) = NamedEntity::content_name().extract(utterance) else {
        dispatcher.utter(ReplyKey::ClarifyError);
        return Ok(vec![]);
    };

    dispatcher.utter(ReplyKey::Second);
    let key = play_playlist::play_playlist_or_track(&music, &name).await?;
    dispatcher.utter(key);
    Ok(vec![])
}
