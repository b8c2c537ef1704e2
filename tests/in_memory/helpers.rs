//! Shared test helpers for in-memory lookup integration tests.

use std::io;
use std::sync::Arc;

use quartermaster::item::{
    adapters::memory::{InMemoryItemCatalogue, ItemRecord, RecordingResponder},
    domain::{
        ChannelId, ChannelWhitelist, CommandInvocation, DamageType, Item, ItemId, ItemProperty,
        ItemSkill,
    },
    ports::Reply,
    services::{ItemLookupService, LookupSettings},
};
use rstest::fixture;
use tokio::runtime::Runtime;

/// Channel present in the whitelist.
pub const LISTED_CHANNEL: ChannelId = ChannelId::new(731_000_000_000_000_001);

/// Channel absent from the whitelist.
pub const UNLISTED_CHANNEL: ChannelId = ChannelId::new(731_000_000_000_000_999);

/// Service type used across the integration tests.
pub type TestLookupService = ItemLookupService<InMemoryItemCatalogue>;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a catalogue seeded with a small armoury.
#[fixture]
pub fn catalogue() -> InMemoryItemCatalogue {
    InMemoryItemCatalogue::with_records([
        ItemRecord::new(
            Item::new(item_id(42), "Frostbite Glaive", 3)
                .with_damage_type(DamageType::Ice)
                .with_icon_url("https://cdn.example.test/icons/42.png"),
        )
        .with_skill(
            ItemSkill::new("Glacial Sweep", "Slows every enemy in front of the wielder.")
                .with_damage_type(DamageType::Ice),
        ),
        ItemRecord::new(Item::new(item_id(7), "Plain Buckler", 1))
            .with_property(ItemProperty::new("Defense", "12"))
            .with_property(ItemProperty::new("Weight", "3.5")),
        ItemRecord::new(Item::new(item_id(211), "Short Sword", 1)),
        ItemRecord::new(Item::new(item_id(212), "Long Sword", 2)),
        ItemRecord::new(Item::new(item_id(213), "Great Sword", 3)),
        ItemRecord::new(Item::new(item_id(214), "Sword of Dawn", 4)),
        ItemRecord::new(Item::new(item_id(215), "Broken Sword", 0)),
    ])
}

/// Builds a service over `catalogue` that admits [`LISTED_CHANNEL`] only.
#[must_use]
pub fn lookup_service(catalogue: &InMemoryItemCatalogue) -> TestLookupService {
    ItemLookupService::new(
        Arc::new(catalogue.clone()),
        Arc::new(LookupSettings::new(ChannelWhitelist::new([LISTED_CHANNEL]))),
    )
}

/// Runs one command through the service and returns what was emitted.
///
/// # Errors
///
/// Returns an error when the responder rejects a reply.
pub fn invoke(
    rt: &Runtime,
    service: &TestLookupService,
    channel: ChannelId,
    query: &str,
) -> Result<RecordingResponder, Box<dyn std::error::Error + Send + Sync>> {
    let responder = RecordingResponder::new();
    let invocation = CommandInvocation::new(channel, query);
    rt.block_on(service.handle(&invocation, &responder))?;
    Ok(responder)
}

/// Extracts the text of a reply, failing on cards.
///
/// # Panics
///
/// Panics when `reply` is a card.
#[must_use]
pub fn reply_text(reply: Option<Reply>) -> String {
    match reply {
        Some(Reply::Text(text)) => text,
        other => panic!("expected a text reply, got {other:?}"),
    }
}

/// Builds an identifier from a literal known to be positive.
///
/// # Panics
///
/// Panics when `value` is zero.
#[must_use]
pub fn item_id(value: u32) -> ItemId {
    ItemId::new(value).expect("test identifiers are positive")
}
