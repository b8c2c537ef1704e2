//! Structured presentation of a single resolved item.

use super::{Item, ItemProperty, ItemSkill};

/// A titled field on an item card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    /// Field heading.
    pub name: String,
    /// Field body.
    pub value: String,
    /// Whether the field shares a row with its neighbours.
    pub inline: bool,
}

/// Chat-platform-neutral card describing one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    heading: String,
    author: String,
    thumbnail: String,
    fields: Vec<CardField>,
}

impl ItemCard {
    /// Assembles a card from an item and its related records.
    ///
    /// Properties become inline fields and skills become block fields, each
    /// in the order given.
    #[must_use]
    pub fn compose(item: &Item, properties: &[ItemProperty], skills: &[ItemSkill]) -> Self {
        let heading = format!(
            "{}\n{}",
            item.damage_type().decorate(item.title()),
            item.rarity_stars()
        );

        let property_fields = properties.iter().map(|property| CardField {
            name: property.name().to_owned(),
            value: property.value().to_owned(),
            inline: true,
        });
        let skill_fields = skills.iter().map(|skill| CardField {
            name: skill.damage_type().decorate(skill.title()),
            value: skill.description().to_owned(),
            inline: false,
        });

        Self {
            heading,
            author: format!("No. {}", item.id()),
            thumbnail: item.icon_url().to_owned(),
            fields: property_fields.chain(skill_fields).collect(),
        }
    }

    /// Returns the heading: decorated title, newline, rarity stars.
    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Returns the author annotation, `No. {id}`.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the thumbnail image reference.
    #[must_use]
    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    /// Returns all fields, inline property fields first.
    #[must_use]
    pub fn fields(&self) -> &[CardField] {
        &self.fields
    }

    /// Returns the inline (property) fields.
    pub fn inline_fields(&self) -> impl Iterator<Item = &CardField> {
        self.fields.iter().filter(|field| field.inline)
    }

    /// Returns the block (skill) fields.
    pub fn block_fields(&self) -> impl Iterator<Item = &CardField> {
        self.fields.iter().filter(|field| !field.inline)
    }
}
