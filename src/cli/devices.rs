use tabled::Table;

use crate::{
    actions::ActionContext,
    error, info,
    types::DevicesResponse,
    utils, warning,
};

pub async fn devices() {
    let settings = super::load_settings();
    let ctx = match ActionContext::new(&settings) {
        Ok(ctx) => ctx,
        Err(e) => error!("Cannot set up Spotify client: {}", e),
    };

    let music = match ctx.music_client().await {
        Ok(music) => music,
        Err(e) => error!("Failed to obtain access token: {}", e),
    };

    let pb = utils::spinner("Fetching devices...");
    let response = music.devices().await;
    pb.finish_and_clear();

    let response = match response {
        Ok(response) => response,
        Err(e) => error!("{}", e),
    };

    if !response.is_success() {
        warning!("Spotify answered {}", response.status);
        return;
    }

    let devices = response.json::<DevicesResponse>().unwrap_or_default().devices;
    if devices.is_empty() {
        info!("No devices available. Open Spotify on one of your devices.");
        return;
    }

    println!("{}", Table::new(utils::device_table_rows(&devices)));
}
