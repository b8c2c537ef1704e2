//! Interaction responder backed by the Discord REST API.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{
    Colour, CommandInteraction, CreateEmbed, CreateEmbedAuthor, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, Http,
};

use crate::item::{
    domain::ItemCard,
    ports::{InteractionResponder, Reply, ResponderError, ResponderResult},
};

/// Answers one slash-command interaction.
pub struct SerenityResponder<'a> {
    http: &'a Arc<Http>,
    command: &'a CommandInteraction,
}

impl<'a> SerenityResponder<'a> {
    /// Creates a responder for `command`.
    #[must_use]
    pub const fn new(http: &'a Arc<Http>, command: &'a CommandInteraction) -> Self {
        Self { http, command }
    }
}

#[async_trait]
impl InteractionResponder for SerenityResponder<'_> {
    async fn reject(&self, message: &str) -> ResponderResult<()> {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(message)
                .ephemeral(true),
        );
        self.command
            .create_response(self.http, response)
            .await
            .map_err(ResponderError::delivery)
    }

    async fn defer(&self) -> ResponderResult<()> {
        self.command
            .defer(self.http)
            .await
            .map_err(ResponderError::delivery)
    }

    async fn send(&self, reply: &Reply) -> ResponderResult<()> {
        let followup = match reply {
            Reply::Text(text) => CreateInteractionResponseFollowup::new().content(text),
            Reply::Card(card) => CreateInteractionResponseFollowup::new().embed(card_embed(card)),
        };
        self.command
            .create_followup(self.http, followup)
            .await
            .map(|_| ())
            .map_err(ResponderError::delivery)
    }
}

/// Builds the embed for an item card.
#[must_use]
pub fn card_embed(card: &ItemCard) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title(card.heading())
        .colour(Colour::BLUE)
        .author(CreateEmbedAuthor::new(card.author()))
        .fields(
            card.fields()
                .iter()
                .map(|field| (field.name.clone(), field.value.clone(), field.inline)),
        );
    // Discord rejects embeds whose thumbnail is not a URL.
    if card.thumbnail().is_empty() {
        embed
    } else {
        embed.thumbnail(card.thumbnail())
    }
}
