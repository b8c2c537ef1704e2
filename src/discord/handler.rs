//! Gateway event handler.

use std::sync::Arc;

use serenity::all::{
    Command, CommandInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, EventHandler, Http, Interaction, Ready, UserId,
};
use serenity::async_trait;
use tracing::{error, info, warn};

use super::{
    DiscordError,
    commands::{
        SEARCH_COMMAND, SYNC_COMMAND, SYNC_DENIED_MESSAGE, command_definitions, query_option,
        synced_message,
    },
    responder::SerenityResponder,
};
use crate::item::{
    domain::{ChannelId, CommandInvocation},
    ports::ItemCatalogue,
    services::ItemLookupService,
};

/// Routes slash commands to the lookup service.
pub struct Handler<C>
where
    C: ItemCatalogue,
{
    service: ItemLookupService<C>,
    sync_on_ready: bool,
}

impl<C> Handler<C>
where
    C: ItemCatalogue,
{
    /// Creates a handler that does not register commands on start-up.
    #[must_use]
    pub const fn new(service: ItemLookupService<C>) -> Self {
        Self {
            service,
            sync_on_ready: false,
        }
    }

    /// Registers commands globally once the gateway is ready.
    #[must_use]
    pub const fn with_sync_on_ready(mut self, sync_on_ready: bool) -> Self {
        self.sync_on_ready = sync_on_ready;
        self
    }

    async fn search_item(
        &self,
        ctx: &Context,
        command: &CommandInteraction,
    ) -> Result<(), DiscordError> {
        let invocation =
            CommandInvocation::new(ChannelId::new(command.channel_id.get()), query_option(command));
        let responder = SerenityResponder::new(&ctx.http, command);
        self.service.handle(&invocation, &responder).await?;
        Ok(())
    }

    async fn sync(&self, ctx: &Context, command: &CommandInteraction) -> Result<(), DiscordError> {
        let application = ctx.http.get_current_application_info().await?;
        let owner = application.owner.as_ref().map(|user| user.id);
        let message = if is_owner(owner, command.user.id) {
            let count = register_commands(&ctx.http).await?;
            info!(count, "synchronized commands");
            synced_message(count)
        } else {
            warn!(user = %command.user.id, "non-owner attempted to synchronize commands");
            SYNC_DENIED_MESSAGE.to_owned()
        };
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(message)
                .ephemeral(true),
        );
        command.create_response(&ctx.http, response).await?;
        Ok(())
    }
}

#[async_trait]
impl<C> EventHandler for Handler<C>
where
    C: ItemCatalogue + 'static,
{
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Bot has logged in as {}", ready.user.name);
        if !self.sync_on_ready {
            return;
        }
        match register_commands(&ctx.http).await {
            Ok(count) => info!(count, "registered commands on start-up"),
            Err(err) => error!(error = %err, "failed to register commands on start-up"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        let result = match command.data.name.as_str() {
            SEARCH_COMMAND => self.search_item(&ctx, &command).await,
            SYNC_COMMAND => self.sync(&ctx, &command).await,
            other => {
                warn!(command = other, "ignoring unknown command");
                Ok(())
            }
        };
        if let Err(err) = result {
            error!(error = %err, command = %command.data.name, "failed to answer interaction");
        }
    }
}

async fn register_commands(http: &Arc<Http>) -> serenity::Result<usize> {
    let registered = Command::set_global_commands(http, command_definitions()).await?;
    Ok(registered.len())
}

fn is_owner(owner: Option<UserId>, caller: UserId) -> bool {
    owner == Some(caller)
}
