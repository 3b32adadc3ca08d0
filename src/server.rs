use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};

use crate::{Res, actions::ActionContext, api, config::Settings, info};

pub fn router(ctx: ActionContext) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/actions", get(api::list_actions))
        .route("/webhook", post(api::webhook))
        .layer(Extension(ctx))
}

pub async fn start_action_server(settings: Settings) -> Res<()> {
    let ctx = ActionContext::new(&settings)?;

    let addr = SocketAddr::from_str(&settings.server_addr)
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Action server listening on {}", addr);
    axum::serve(listener, router(ctx)).await?;
    Ok(())
}
