//! Item records and their related property and skill projections.

use super::{DamageType, ItemId};

/// Glyph repeated once per rarity point.
pub const RARITY_STAR: &str = "⭐";

/// A lookup-able equipment record.
///
/// Items are read-only projections fetched per interaction; the pipeline
/// never mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    title: String,
    rarity: u8,
    damage_type: DamageType,
    icon_url: String,
}

impl Item {
    /// Creates an unclassified item with no icon.
    #[must_use]
    pub fn new(id: ItemId, title: impl Into<String>, rarity: u8) -> Self {
        Self {
            id,
            title: title.into(),
            rarity,
            damage_type: DamageType::None,
            icon_url: String::new(),
        }
    }

    /// Sets the damage classification.
    #[must_use]
    pub const fn with_damage_type(mut self, damage_type: DamageType) -> Self {
        self.damage_type = damage_type;
        self
    }

    /// Sets the icon reference.
    #[must_use]
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = icon_url.into();
        self
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the rarity value.
    #[must_use]
    pub const fn rarity(&self) -> u8 {
        self.rarity
    }

    /// Returns the rarity rendered as repeated star glyphs.
    #[must_use]
    pub fn rarity_stars(&self) -> String {
        RARITY_STAR.repeat(usize::from(self.rarity))
    }

    /// Returns the damage classification.
    #[must_use]
    pub const fn damage_type(&self) -> DamageType {
        self.damage_type
    }

    /// Returns the opaque icon reference.
    #[must_use]
    pub fn icon_url(&self) -> &str {
        &self.icon_url
    }
}

/// A named stat belonging to one item, rendered inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemProperty {
    name: String,
    value: String,
}

impl ItemProperty {
    /// Creates a property from display strings.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the property value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A skill belonging to one item, rendered as a block field.
///
/// A skill's damage type is independent of its parent item's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSkill {
    title: String,
    description: String,
    damage_type: DamageType,
}

impl ItemSkill {
    /// Creates an unclassified skill.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            damage_type: DamageType::None,
        }
    }

    /// Sets the damage classification.
    #[must_use]
    pub const fn with_damage_type(mut self, damage_type: DamageType) -> Self {
        self.damage_type = damage_type;
        self
    }

    /// Returns the skill title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the skill description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the damage classification.
    #[must_use]
    pub const fn damage_type(&self) -> DamageType {
        self.damage_type
    }
}
