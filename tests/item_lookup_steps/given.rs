//! Given steps for item lookup BDD scenarios.

use super::world::{ItemLookupWorld, item_id};
use quartermaster::item::{
    adapters::memory::ItemRecord,
    domain::{ChannelId, Item, ItemSkill},
};
use rstest_bdd_macros::given;

#[given(r#"an item {id:u32} titled "{title}" with rarity {rarity:u8}"#)]
fn an_item_titled(
    world: &mut ItemLookupWorld,
    id: u32,
    title: String,
    rarity: u8,
) -> Result<(), eyre::Report> {
    world
        .catalogue
        .insert(ItemRecord::new(Item::new(item_id(id)?, title, rarity)));
    Ok(())
}

#[given(r#"item {id:u32} has the skill "{skill}""#)]
fn item_has_skill(
    world: &mut ItemLookupWorld,
    id: u32,
    skill: String,
) -> Result<(), eyre::Report> {
    let wanted = item_id(id)?;
    let item = world
        .catalogue
        .records()
        .into_iter()
        .find(|record| record.item.id() == wanted)
        .ok_or_else(|| eyre::eyre!("item {id} has not been seeded"))?;
    world
        .catalogue
        .insert(item.with_skill(ItemSkill::new(skill, "Scenario skill.")));
    Ok(())
}

#[given(r#"{count:usize} items titled "{title}" starting at identifier {first:u32}"#)]
fn several_items_titled(
    world: &mut ItemLookupWorld,
    count: usize,
    title: String,
    first: u32,
) -> Result<(), eyre::Report> {
    for (index, rarity) in (0..count).zip((1..=5).cycle()) {
        let offset = u32::try_from(index)?;
        let item = Item::new(item_id(first + offset)?, format!("{title} {offset}"), rarity);
        world.catalogue.insert(ItemRecord::new(item));
    }
    Ok(())
}

#[given("the whitelist contains channel {channel:u64}")]
fn whitelist_contains(world: &mut ItemLookupWorld, channel: u64) {
    world.whitelist.push(ChannelId::new(channel));
}
