use serde_json::Value;

use crate::{
    Res,
    actions::{ActionContext, Dispatcher, FEATURED_PLAYLISTS_HEADER, PLAYLISTS_PRESENTED_SLOT},
    spotify::browse::FEATURED_PLAYLISTS_LIMIT,
    types::{Event, FeaturedPlaylistsResponse, Utterance},
};

/// `action_get_custom_playlist`: lists featured playlists, one message each.
pub async fn run(
    ctx: &ActionContext,
    _utterance: &Utterance,
    dispatcher: &mut Dispatcher,
) -> Res<Vec<Event>> {
    let music = ctx.music_client().await?;

    let response = music
        .featured_playlists(FEATURED_PLAYLISTS_LIMIT, &ctx.market)
        .await?;
    if !response.is_success() {
        dispatcher.utter_text(format!("Error {}", response.status.as_u16()));
        return Ok(vec![]);
    }

    let featured = response
        .json::<FeaturedPlaylistsResponse>()
        .unwrap_or_default();

    dispatcher.utter_text(FEATURED_PLAYLISTS_HEADER);
    for name in featured.playlists.names() {
        dispatcher.utter_text(name);
    }

    Ok(vec![Event::slot(PLAYLISTS_PRESENTED_SLOT, Value::Bool(true))])
}
