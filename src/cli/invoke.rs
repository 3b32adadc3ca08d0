use crate::{
    actions::{self, ActionContext, ActionKind},
    error, info, success,
    types::{Entity, Event, Utterance},
    utils,
};

pub async fn invoke(action: &str, text: String, entities: Vec<Entity>) {
    let kind = match action.parse::<ActionKind>() {
        Ok(kind) => kind,
        Err(e) => error!("{}", e),
    };

    let settings = super::load_settings();
    let ctx = match ActionContext::new(&settings) {
        Ok(ctx) => ctx,
        Err(e) => error!("Cannot set up Spotify client: {}", e),
    };

    let utterance = Utterance {
        intent: None,
        entities,
        text,
    };

    let pb = utils::spinner(&format!("Running {}...", kind));
    let result = actions::run(kind, &ctx, &utterance).await;
    pb.finish_and_clear();

    match result {
        Ok(output) => {
            for reply in &output.replies {
                info!("{}", reply);
            }
            for event in &output.events {
                match event {
                    Event::SlotSet { name, value, .. } => info!("slot {} = {}", name, value),
                }
            }
            success!("{} finished", kind);
        }
        Err(e) => error!("{} failed: {}", kind, e),
    }
}
