//! Gateway event handler: registers the slash command and routes every
//! interaction to its handler behind a single error boundary.

use serenity::async_trait;
use serenity::model::application::{Command, Interaction};
use serenity::model::gateway::Ready;
use serenity::prelude::{Context, EventHandler};

use crate::interactions::{composer_handler, ids, modal_handler, util};
use crate::{commands, AppState};

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(bot = %ready.user.name, "connected and ready");
        // Replaces the global command set wholesale, dropping stale commands.
        if let Err(e) =
            Command::set_global_commands(&ctx.http, vec![commands::embed::run::register()]).await
        {
            tracing::error!(error = ?e, "failed to register slash commands");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };

        let result = match &interaction {
            Interaction::Command(command) if command.data.name == "embed" => {
                commands::embed::run::run_slash(&ctx, command, &app_state).await
            }
            Interaction::Component(component)
                if ids::is_composer_id(&component.data.custom_id) =>
            {
                composer_handler::handle(&ctx, component, &app_state).await
            }
            Interaction::Modal(modal) if ids::is_composer_id(&modal.data.custom_id) => {
                modal_handler::handle(&ctx, modal, &app_state).await
            }
            _ => Ok(()),
        };

        // One interaction's failure must never take down the event loop. Log
        // it and tell the user, unless the interaction was already answered.
        if let Err(e) = result {
            tracing::error!(error = ?e, "interaction handling failed");
            util::notify_failure(&ctx, &interaction).await;
        }
    }
}
