use crate::{
    Res,
    actions::{ActionContext, Dispatcher, NOTHING_PLAYING_TEXT},
    reply::ReplyKey,
    spotify::NowPlaying,
    types::{Event, Utterance},
    warning,
};

/// `action_add_current_track`: saves whatever is playing to the library.
pub async fn run(
    ctx: &ActionContext,
    _utterance: &Utterance,
    dispatcher: &mut Dispatcher,
) -> Res<Vec<Event>> {
    let music = ctx.music_client().await?;

    let track_id = match music.current_playback().await? {
        NowPlaying::Item(id) => id,
        NowPlaying::Nothing => {
            dispatcher.utter_text(NOTHING_PLAYING_TEXT);
            return Ok(vec![]);
        }
        NowPlaying::Failed(status) => {
            warning!("Reading the playback state failed with {}", status);
            dispatcher.utter_text(NOTHING_PLAYING_TEXT);
            return Ok(vec![]);
        }
    };

    dispatcher.utter(ReplyKey::Second);
    let response = music.save_track(&track_id).await?;
    if response.is_success() {
        dispatcher.utter(ReplyKey::AddTrackOk);
    } else {
        warning!("Saving track {} failed with {}", track_id, response.status);
        dispatcher.utter(ReplyKey::AddTrackError);
    }
    Ok(vec![])
}
