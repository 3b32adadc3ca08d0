use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    actions::{self, ActionContext, ActionKind},
    info,
    types::{ActionCall, ActionError, ActionInfo, ActionResponse, Utterance},
    warning,
};

pub async fn webhook(
    Extension(ctx): Extension<ActionContext>,
    Json(call): Json<ActionCall>,
) -> Response {
    let kind = match call.next_action.parse::<ActionKind>() {
        Ok(kind) => kind,
        Err(e) => {
            warning!("{}", e);
            return (
                StatusCode::NOT_FOUND,
                Json(ActionError {
                    error: e,
                    action_name: call.next_action,
                }),
            )
                .into_response();
        }
    };

    let sender = call
        .sender_id
        .or(call.tracker.sender_id.clone())
        .unwrap_or_else(|| "unknown".to_string());
    let utterance = Utterance::from(call.tracker.latest_message);
    info!(
        "Running {} for conversation {} (intent: {})",
        kind,
        sender,
        utterance.intent.as_deref().unwrap_or("none")
    );
    match actions::run(kind, &ctx, &utterance).await {
        Ok(output) => Json(ActionResponse::from(output)).into_response(),
        Err(e) => {
            warning!("Action {} failed: {}", kind, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ActionError {
                    error: e.to_string(),
                    action_name: kind.name().to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn list_actions() -> Json<Vec<ActionInfo>> {
    Json(
        ActionKind::ALL
            .iter()
            .map(|kind| ActionInfo {
                name: kind.name().to_string(),
            })
            .collect(),
    )
}
