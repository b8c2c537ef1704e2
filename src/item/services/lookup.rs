//! Item lookup pipeline.
//!
//! Provides [`ItemLookupService`], which gates a command on its channel,
//! classifies the query, dispatches it to the catalogue, and either lists
//! candidate matches or renders a single item card.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use super::replies::{
    ACCESS_DENIED_MESSAGE, LOOKUP_FAILED_MESSAGE, LookupOutcome, ReplyRenderError, compose_reply,
};
use crate::item::{
    domain::{
        ChannelId, ChannelWhitelist, CommandInvocation, Item, ItemCard, ItemQuery, LookupMatches,
        MatchList,
    },
    ports::{
        CatalogueError, CatalogueOperation, CatalogueResult, CatalogueSession,
        InteractionResponder, ItemCatalogue, Reply, ResponderResult,
    },
};

/// Deadline applied to each catalogue call unless configured otherwise.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Process-wide, read-only settings for the lookup pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSettings {
    whitelist: ChannelWhitelist,
    call_timeout: Duration,
}

impl LookupSettings {
    /// Creates settings with the default per-call deadline.
    #[must_use]
    pub const fn new(whitelist: ChannelWhitelist) -> Self {
        Self {
            whitelist,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Sets the deadline applied to each catalogue call.
    #[must_use]
    pub const fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Returns the channel whitelist.
    #[must_use]
    pub const fn whitelist(&self) -> &ChannelWhitelist {
        &self.whitelist
    }

    /// Returns the per-call deadline.
    #[must_use]
    pub const fn call_timeout(&self) -> Duration {
        self.call_timeout
    }
}

/// Service-level errors for item lookups.
#[derive(Debug, Error)]
pub enum ItemLookupError {
    /// The catalogue failed or stalled.
    #[error(transparent)]
    Collaborator(#[from] CatalogueError),
    /// The reply could not be composed.
    #[error(transparent)]
    Reply(#[from] ReplyRenderError),
}

/// Result type for item lookup service operations.
pub type ItemLookupResult<T> = Result<T, ItemLookupError>;

/// Lookup pipeline orchestration service.
#[derive(Clone)]
pub struct ItemLookupService<C>
where
    C: ItemCatalogue,
{
    catalogue: Arc<C>,
    settings: Arc<LookupSettings>,
}

impl<C> ItemLookupService<C>
where
    C: ItemCatalogue,
{
    /// Creates a new lookup service.
    #[must_use]
    pub const fn new(catalogue: Arc<C>, settings: Arc<LookupSettings>) -> Self {
        Self {
            catalogue,
            settings,
        }
    }

    /// Returns the pipeline settings.
    #[must_use]
    pub fn settings(&self) -> &LookupSettings {
        &self.settings
    }

    /// Returns `true` when commands from `channel` may proceed.
    #[must_use]
    pub fn authorize(&self, channel: ChannelId) -> bool {
        self.settings.whitelist().allows(channel)
    }

    /// Runs the full pipeline for one command and emits its reply.
    ///
    /// Commands from channels outside the whitelist get a single private
    /// rejection and never reach the catalogue. Otherwise the interaction is
    /// deferred, resolved, and answered with a follow-up. Lookup failures,
    /// and replies the platform refuses to deliver, are logged and answered
    /// with a generic message.
    ///
    /// # Errors
    ///
    /// Returns [`ResponderError`](crate::item::ports::ResponderError) only
    /// when a reply cannot be delivered.
    #[instrument(
        name = "item.lookup",
        skip_all,
        fields(channel = %invocation.channel(), query = invocation.query())
    )]
    pub async fn handle<R>(
        &self,
        invocation: &CommandInvocation,
        responder: &R,
    ) -> ResponderResult<()>
    where
        R: InteractionResponder + ?Sized,
    {
        if !self.authorize(invocation.channel()) {
            debug!("rejecting command from channel outside the whitelist");
            return responder.reject(ACCESS_DENIED_MESSAGE).await;
        }

        responder.defer().await?;

        let failure = Reply::Text(LOOKUP_FAILED_MESSAGE.to_owned());
        let reply = match self.lookup(invocation.query()).await {
            Ok(reply) => reply,
            Err(err) => {
                error!(error = %err, "item lookup failed");
                failure.clone()
            }
        };

        let Err(err) = responder.send(&reply).await else {
            return Ok(());
        };
        if reply == failure {
            return Err(err);
        }
        // The platform refused the reply, e.g. for exceeding its size limits.
        error!(error = %err, "reply was refused, sending the failure notice instead");
        responder.send(&failure).await
    }

    /// Resolves a query and composes the reply without emitting it.
    ///
    /// # Errors
    ///
    /// Returns [`ItemLookupError`] when the catalogue fails or the reply
    /// cannot be rendered.
    pub async fn lookup(&self, raw_query: &str) -> ItemLookupResult<Reply> {
        let outcome = self.resolve(raw_query).await?;
        Ok(compose_reply(outcome)?)
    }

    /// Classifies and resolves a raw query against the catalogue.
    ///
    /// A catalogue session is held for the duration of this call only and is
    /// released on every exit path.
    ///
    /// # Errors
    ///
    /// Returns [`ItemLookupError::Collaborator`] when any catalogue call
    /// fails or exceeds its deadline.
    pub async fn resolve(&self, raw_query: &str) -> ItemLookupResult<LookupOutcome> {
        let query = ItemQuery::classify(raw_query);
        debug!(identifier = query.is_identifier(), "classified query");

        let session = self
            .within_deadline(
                CatalogueOperation::OpenSession,
                self.catalogue.open_session(),
            )
            .await?;

        let outcome = match self.dispatch(session.as_ref(), &query).await? {
            LookupMatches::None => LookupOutcome::NotFound {
                query: raw_query.to_owned(),
            },
            LookupMatches::Single(item) => {
                LookupOutcome::Found(self.render(session.as_ref(), &item).await?)
            }
            LookupMatches::Multiple(items) => {
                info!(matches = items.len(), "query matched several items");
                LookupOutcome::Ambiguous(MatchList::from_items(&items))
            }
        };
        Ok(outcome)
    }

    async fn dispatch(
        &self,
        session: &dyn CatalogueSession,
        query: &ItemQuery,
    ) -> CatalogueResult<LookupMatches> {
        match query {
            ItemQuery::Id(id) => {
                let item = self
                    .within_deadline(CatalogueOperation::GetItem, session.get_item(*id))
                    .await?;
                Ok(LookupMatches::from(item))
            }
            ItemQuery::OutOfRangeId => Ok(LookupMatches::None),
            ItemQuery::Text(text) => {
                let items = self
                    .within_deadline(CatalogueOperation::SearchItems, session.search_items(text))
                    .await?;
                Ok(LookupMatches::from_items(items))
            }
        }
    }

    async fn render(
        &self,
        session: &dyn CatalogueSession,
        item: &Item,
    ) -> CatalogueResult<ItemCard> {
        let properties = self
            .within_deadline(
                CatalogueOperation::GetItemProperties,
                session.get_item_properties(item),
            )
            .await?;
        let skills = self
            .within_deadline(
                CatalogueOperation::GetItemSkills,
                session.get_item_skills(item),
            )
            .await?;
        Ok(ItemCard::compose(item, &properties, &skills))
    }

    async fn within_deadline<T>(
        &self,
        operation: CatalogueOperation,
        future: impl Future<Output = CatalogueResult<T>>,
    ) -> CatalogueResult<T> {
        let after = self.settings.call_timeout();
        tokio::time::timeout(after, future).await.unwrap_or_else(|_| {
            warn!(%operation, ?after, "catalogue call exceeded its deadline");
            Err(CatalogueError::TimedOut { operation, after })
        })
    }
}
