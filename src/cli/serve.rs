use crate::{error, server};

pub async fn serve() {
    let settings = super::load_settings();
    if let Err(e) = server::start_action_server(settings).await {
        error!("Action server stopped: {}", e);
    }
}
