//! Shared world state for item lookup BDD scenarios.

use std::sync::Arc;

use quartermaster::item::{
    adapters::memory::{InMemoryItemCatalogue, RecordingResponder},
    domain::{ChannelId, ChannelWhitelist, ItemId},
    services::{ItemLookupService, LookupSettings},
};
use rstest::fixture;

/// Scenario world for item lookup behaviour tests.
#[derive(Default)]
pub struct ItemLookupWorld {
    /// Catalogue seeded by the given steps.
    pub catalogue: InMemoryItemCatalogue,
    /// Channels admitted by the service.
    pub whitelist: Vec<ChannelId>,
    /// Replies emitted by the last command.
    pub responder: Option<RecordingResponder>,
}

impl ItemLookupWorld {
    /// Builds a lookup service over the seeded catalogue and whitelist.
    #[must_use]
    pub fn service(&self) -> ItemLookupService<InMemoryItemCatalogue> {
        ItemLookupService::new(
            Arc::new(self.catalogue.clone()),
            Arc::new(LookupSettings::new(ChannelWhitelist::new(
                self.whitelist.iter().copied(),
            ))),
        )
    }

    /// Returns the responder of the last command.
    ///
    /// # Errors
    ///
    /// Returns an error when no command has run yet.
    pub fn responder(&self) -> Result<&RecordingResponder, eyre::Report> {
        self.responder
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no command has been issued in this scenario"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ItemLookupWorld {
    ItemLookupWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a scenario identifier.
///
/// # Errors
///
/// Returns an error when `value` is zero.
pub fn item_id(value: u32) -> Result<ItemId, eyre::Report> {
    ItemId::new(value).map_err(|err| eyre::eyre!("invalid item identifier {value}: {err}"))
}
