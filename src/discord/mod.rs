//! Discord gateway adapter.
//!
//! Wires the item lookup service into a serenity client: slash-command
//! definitions, the event handler, and the interaction responder.

mod commands;
mod handler;
mod responder;

pub use commands::{
    QUERY_OPTION, SEARCH_COMMAND, SYNC_COMMAND, SYNC_DENIED_MESSAGE, command_definitions,
    synced_message,
};
pub use handler::Handler;
pub use responder::{SerenityResponder, card_embed};

use serenity::all::{Client, GatewayIntents};
use thiserror::Error;

use crate::item::ports::{ItemCatalogue, ResponderError};

/// Errors raised by the Discord adapter.
#[derive(Debug, Error)]
pub enum DiscordError {
    /// The gateway or REST API call failed.
    #[error("discord request failed: {0}")]
    Gateway(#[from] serenity::Error),
    /// A reply could not be delivered.
    #[error(transparent)]
    Reply(#[from] ResponderError),
}

/// Connects to the gateway and serves interactions until the client stops.
///
/// Slash commands need no privileged intents.
///
/// # Errors
///
/// Returns [`DiscordError::Gateway`] when the client cannot be built or the
/// gateway connection ends with an error.
pub async fn run<C>(token: &str, handler: Handler<C>) -> Result<(), DiscordError>
where
    C: ItemCatalogue + 'static,
{
    let mut client = Client::builder(token, GatewayIntents::GUILDS)
        .event_handler(handler)
        .await?;
    client.start().await?;
    Ok(())
}
