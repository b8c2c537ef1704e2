//! Then steps for item lookup BDD scenarios.

use super::world::ItemLookupWorld;
use quartermaster::item::{
    adapters::memory::ResponderEvent, domain::ItemCard, ports::Reply,
    services::ACCESS_DENIED_MESSAGE,
};
use rstest_bdd_macros::then;

fn last_card(world: &ItemLookupWorld) -> Result<ItemCard, eyre::Report> {
    match world.responder()?.last_reply() {
        Some(Reply::Card(card)) => Ok(card),
        other => Err(eyre::eyre!("expected an item card, got {other:?}")),
    }
}

fn last_text(world: &ItemLookupWorld) -> Result<String, eyre::Report> {
    match world.responder()?.last_reply() {
        Some(Reply::Text(text)) => Ok(text),
        other => Err(eyre::eyre!("expected a text reply, got {other:?}")),
    }
}

#[then("the caller receives the private rejection")]
fn caller_receives_rejection(world: &ItemLookupWorld) -> Result<(), eyre::Report> {
    let events = world.responder()?.events();
    if events != vec![ResponderEvent::Rejected(ACCESS_DENIED_MESSAGE.to_owned())] {
        return Err(eyre::eyre!("expected a single rejection, got {events:?}"));
    }
    Ok(())
}

#[then("no catalogue session was opened")]
fn no_session_opened(world: &ItemLookupWorld) -> Result<(), eyre::Report> {
    let opened = world.catalogue.sessions_opened();
    if opened != 0 {
        return Err(eyre::eyre!("expected no sessions, {opened} were opened"));
    }
    Ok(())
}

#[then("every catalogue session was released")]
fn every_session_released(world: &ItemLookupWorld) -> Result<(), eyre::Report> {
    let active = world.catalogue.sessions_active();
    if active != 0 {
        return Err(eyre::eyre!("{active} sessions are still held"));
    }
    Ok(())
}

#[then(r#"the reply is a card whose heading ends with "{suffix}""#)]
fn card_heading_ends_with(world: &ItemLookupWorld, suffix: String) -> Result<(), eyre::Report> {
    let card = last_card(world)?;
    if !card.heading().ends_with(&suffix) {
        return Err(eyre::eyre!(
            "heading {:?} does not end with {suffix:?}",
            card.heading()
        ));
    }
    Ok(())
}

#[then("the card has {inline:usize} inline fields and {block:usize} block fields")]
fn card_has_fields(
    world: &ItemLookupWorld,
    inline: usize,
    block: usize,
) -> Result<(), eyre::Report> {
    let card = last_card(world)?;
    let found = (card.inline_fields().count(), card.block_fields().count());
    if found != (inline, block) {
        return Err(eyre::eyre!(
            "expected {inline} inline and {block} block fields, found {found:?}"
        ));
    }
    Ok(())
}

#[then("the reply lists {count:usize} items")]
fn reply_lists_items(world: &ItemLookupWorld, count: usize) -> Result<(), eyre::Report> {
    let text = last_text(world)?;
    let listed = text.lines().filter(|line| line.starts_with("`- ")).count();
    if listed != count {
        return Err(eyre::eyre!("expected {count} listed items, found {listed}"));
    }
    Ok(())
}

#[then(r#"the reply says nothing was found for "{query}""#)]
fn reply_says_not_found(world: &ItemLookupWorld, query: String) -> Result<(), eyre::Report> {
    let text = last_text(world)?;
    let expected = format!("**❌ Nothing found for** `{query}`");
    if text != expected {
        return Err(eyre::eyre!("expected {expected:?}, got {text:?}"));
    }
    Ok(())
}
