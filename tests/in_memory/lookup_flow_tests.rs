//! Integration tests for identifier and text lookups.

use crate::in_memory::helpers::{
    LISTED_CHANNEL, catalogue, invoke, item_id, lookup_service, reply_text, runtime,
};
use quartermaster::item::{
    adapters::memory::{InMemoryItemCatalogue, ItemRecord},
    domain::{Item, MAX_LISTED_MATCHES},
    ports::Reply,
};
use rstest::rstest;
use tokio::runtime::Runtime;

// ── Identifier lookups ─────────────────────────────────────────────

#[rstest]
fn identifier_renders_item_card(
    runtime: std::io::Result<Runtime>,
    catalogue: InMemoryItemCatalogue,
) {
    let rt = runtime.expect("failed to create runtime");
    let service = lookup_service(&catalogue);

    let responder = invoke(&rt, &service, LISTED_CHANNEL, "42").expect("reply delivered");

    let Some(Reply::Card(card)) = responder.last_reply() else {
        panic!("expected an item card");
    };
    assert_eq!(card.heading(), "Frostbite Glaive ❄️\n⭐⭐⭐");
    assert_eq!(card.author(), "No. 42");
    assert_eq!(card.thumbnail(), "https://cdn.example.test/icons/42.png");
    assert_eq!(card.inline_fields().count(), 0);
    let skills: Vec<_> = card.block_fields().collect();
    assert_eq!(skills.len(), 1);
    assert_eq!(
        skills.first().map(|field| field.name.as_str()),
        Some("Glacial Sweep ❄️")
    );
}

#[rstest]
fn properties_become_inline_fields_in_order(
    runtime: std::io::Result<Runtime>,
    catalogue: InMemoryItemCatalogue,
) {
    let rt = runtime.expect("failed to create runtime");
    let service = lookup_service(&catalogue);

    let responder = invoke(&rt, &service, LISTED_CHANNEL, "7").expect("reply delivered");

    let Some(Reply::Card(card)) = responder.last_reply() else {
        panic!("expected an item card");
    };
    assert_eq!(card.heading(), "Plain Buckler\n⭐");
    let names: Vec<_> = card.inline_fields().map(|field| field.name.as_str()).collect();
    assert_eq!(names, vec!["Defense", "Weight"]);
    assert_eq!(card.block_fields().count(), 0);
}

#[rstest]
fn unknown_identifier_echoes_query(
    runtime: std::io::Result<Runtime>,
    catalogue: InMemoryItemCatalogue,
) {
    let rt = runtime.expect("failed to create runtime");
    let service = lookup_service(&catalogue);

    let responder = invoke(&rt, &service, LISTED_CHANNEL, "9999").expect("reply delivered");

    assert_eq!(
        reply_text(responder.last_reply()),
        "**❌ Nothing found for** `9999`"
    );
}

#[rstest]
fn leading_zero_query_is_searched_as_text(
    runtime: std::io::Result<Runtime>,
    catalogue: InMemoryItemCatalogue,
) {
    let rt = runtime.expect("failed to create runtime");
    let service = lookup_service(&catalogue);

    // Item 7 exists, but "007" never resolves as an identifier.
    let responder = invoke(&rt, &service, LISTED_CHANNEL, "007").expect("reply delivered");

    assert_eq!(
        reply_text(responder.last_reply()),
        "**❌ Nothing found for** `007`"
    );
}

// ── Text lookups ───────────────────────────────────────────────────

#[rstest]
fn single_search_hit_renders_card(
    runtime: std::io::Result<Runtime>,
    catalogue: InMemoryItemCatalogue,
) {
    let rt = runtime.expect("failed to create runtime");
    let service = lookup_service(&catalogue);

    let responder = invoke(&rt, &service, LISTED_CHANNEL, "glaive").expect("reply delivered");

    assert!(matches!(responder.last_reply(), Some(Reply::Card(_))));
}

#[rstest]
fn several_search_hits_list_every_match(
    runtime: std::io::Result<Runtime>,
    catalogue: InMemoryItemCatalogue,
) {
    let rt = runtime.expect("failed to create runtime");
    let service = lookup_service(&catalogue);

    let responder = invoke(&rt, &service, LISTED_CHANNEL, "sword").expect("reply delivered");

    let text = reply_text(responder.last_reply());
    let lines: Vec<_> = text.lines().filter(|line| line.starts_with("`- ")).collect();
    assert_eq!(
        lines,
        vec![
            "`- Short Sword [ID: 211] 1⭐`",
            "`- Long Sword [ID: 212] 2⭐`",
            "`- Great Sword [ID: 213] 3⭐`",
            "`- Sword of Dawn [ID: 214] 4⭐`",
            "`- Broken Sword [ID: 215] 0⭐`",
        ]
    );
    assert!(text.starts_with("**✅ Multiple items found:**"));
    assert!(text.ends_with("***please use **`/search_item [ID]`** to select a specific item***"));
}

#[rstest]
fn match_list_is_capped(runtime: std::io::Result<Runtime>) {
    let rt = runtime.expect("failed to create runtime");
    let catalogue = InMemoryItemCatalogue::with_records(
        (1..=25).map(|n| ItemRecord::new(Item::new(item_id(500 + n), format!("Arrow {n}"), 1))),
    );
    let service = lookup_service(&catalogue);

    let responder = invoke(&rt, &service, LISTED_CHANNEL, "arrow").expect("reply delivered");

    let text = reply_text(responder.last_reply());
    let lines: Vec<_> = text.lines().filter(|line| line.starts_with("`- ")).collect();
    assert_eq!(lines.len(), MAX_LISTED_MATCHES);
    assert_eq!(lines.first(), Some(&"`- Arrow 1 [ID: 501] 1⭐`"));
    assert_eq!(lines.last(), Some(&"`- Arrow 20 [ID: 520] 1⭐`"));
}
