//! Diesel row models for item catalogue persistence.

use super::schema::{item_properties, item_skills, items};
use diesel::prelude::*;

/// Query result row for item records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ItemRow {
    /// Item identifier.
    pub id: i32,
    /// Display name.
    pub title: String,
    /// Rarity value.
    pub rarity: i16,
    /// Damage classification.
    pub damage_type: Option<String>,
    /// Icon image reference.
    pub icon_url: String,
}

/// Query result row for item properties.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = item_properties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ItemPropertyRow {
    /// Property name.
    pub name: String,
    /// Property value.
    pub value: String,
}

/// Query result row for item skills.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = item_skills)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ItemSkillRow {
    /// Skill title.
    pub title: String,
    /// Skill description.
    pub description: String,
    /// Damage classification.
    pub damage_type: Option<String>,
}
