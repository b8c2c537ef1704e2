//! Slash-command definitions.

use serenity::all::{
    CommandDataOptionValue, CommandInteraction, CommandOptionType, CreateCommand,
    CreateCommandOption,
};

/// Name of the item lookup command.
pub const SEARCH_COMMAND: &str = "search_item";
/// Name of the command registration command.
pub const SYNC_COMMAND: &str = "sync";
/// Name of the lookup query option.
pub const QUERY_OPTION: &str = "query";
/// Reply sent when someone other than the owner runs `/sync`.
pub const SYNC_DENIED_MESSAGE: &str = "Only the bot owner can synchronize commands";

/// Returns every command the bot registers.
#[must_use]
pub fn command_definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(SEARCH_COMMAND)
            .description("Searches for an equipment by query")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    QUERY_OPTION,
                    "Name or ID of an equipment",
                )
                .required(true),
            ),
        CreateCommand::new(SYNC_COMMAND).description("Synchronize all commands"),
    ]
}

/// Formats the `/sync` confirmation.
#[must_use]
pub fn synced_message(count: usize) -> String {
    format!("Synced {count} command(s)")
}

pub(crate) fn query_option(command: &CommandInteraction) -> &str {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == QUERY_OPTION)
        .and_then(|option| match &option.value {
            CommandDataOptionValue::String(value) => Some(value.as_str()),
            _ => None,
        })
        .unwrap_or_default()
}
