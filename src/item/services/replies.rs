//! Text replies sent back to the chat platform.

use minijinja::{Environment, context};
use thiserror::Error;

use crate::item::domain::{ItemCard, MatchList};
use crate::item::ports::Reply;

/// Ephemeral reply for commands sent from channels outside the whitelist.
pub const ACCESS_DENIED_MESSAGE: &str = "You can't use bot commands here";

/// Reply for lookups that failed inside the catalogue.
///
/// Carries no error detail.
pub const LOOKUP_FAILED_MESSAGE: &str =
    "**❌ Something went wrong while looking that up, please try again later**";

const NOT_FOUND_TEMPLATE: &str = "**❌ Nothing found for** `{{ query }}`";

const MATCH_LIST_TEMPLATE: &str = concat!(
    "**✅ Multiple items found:**\n",
    "{% for entry in entries %}",
    "`- {{ entry.title }} [ID: {{ entry.id }}] {{ entry.rarity }}⭐`\n",
    "{% endfor %}",
    "***please use **`/search_item [ID]`** to select a specific item***",
);

/// Routed result of a lookup, before it is turned into a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Nothing matched the query.
    NotFound {
        /// The query exactly as the user typed it.
        query: String,
    },
    /// Several items matched; the user must pick one by identifier.
    Ambiguous(MatchList),
    /// A single item was resolved and rendered.
    Found(ItemCard),
}

/// Error raised when a reply template cannot be rendered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render {template} reply: {reason}")]
pub struct ReplyRenderError {
    /// Template that failed.
    pub template: &'static str,
    /// Rendering failure reason.
    pub reason: String,
}

/// Turns a lookup outcome into the reply sent to the user.
///
/// # Errors
///
/// Returns [`ReplyRenderError`] when a text template fails to render.
pub fn compose_reply(outcome: LookupOutcome) -> Result<Reply, ReplyRenderError> {
    match outcome {
        LookupOutcome::NotFound { query } => render(
            "not_found",
            NOT_FOUND_TEMPLATE,
            context! { query => query },
        )
        .map(Reply::Text),
        LookupOutcome::Ambiguous(matches) => render(
            "match_list",
            MATCH_LIST_TEMPLATE,
            context! { entries => matches.entries() },
        )
        .map(Reply::Text),
        LookupOutcome::Found(card) => Ok(Reply::Card(card)),
    }
}

fn render(
    template: &'static str,
    source: &str,
    context: minijinja::Value,
) -> Result<String, ReplyRenderError> {
    Environment::new()
        .render_str(source, context)
        .map_err(|error| ReplyRenderError {
            template,
            reason: error.to_string(),
        })
}
