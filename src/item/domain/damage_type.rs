//! Damage classification shared by items and their skills.

use super::ItemDomainError;
use std::fmt;

/// Closed set of damage classifications, including the absent case.
///
/// Every variant maps to a glyph, so rendering never fails on an
/// unclassified item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DamageType {
    /// Physical damage.
    Physical,
    /// Fire damage.
    Fire,
    /// Ice damage.
    Ice,
    /// Energy damage.
    Energy,
    /// Light damage.
    Light,
    /// Poison damage.
    Poison,
    /// No damage classification.
    #[default]
    None,
}

impl DamageType {
    /// Returns the glyph shown next to titles of this damage type.
    ///
    /// [`DamageType::None`] maps to the empty string.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Physical => "🗡️",
            Self::Fire => "🔥",
            Self::Ice => "❄️",
            Self::Energy => "🔯",
            Self::Light => "⚡",
            Self::Poison => "☠️",
            Self::None => "",
        }
    }

    /// Returns the canonical storage representation, `None` for the absent
    /// case.
    #[must_use]
    pub const fn as_storage(self) -> Option<&'static str> {
        match self {
            Self::Physical => Some("Physical"),
            Self::Fire => Some("Fire"),
            Self::Ice => Some("Ice"),
            Self::Energy => Some("Energy"),
            Self::Light => Some("Light"),
            Self::Poison => Some("Poison"),
            Self::None => None,
        }
    }

    /// Parses a nullable storage value.
    ///
    /// Matching is case-insensitive; blank and `"none"` values map to
    /// [`DamageType::None`].
    ///
    /// # Errors
    ///
    /// Returns [`ItemDomainError::UnknownDamageType`] for values outside the
    /// enumeration.
    pub fn from_storage(value: Option<&str>) -> Result<Self, ItemDomainError> {
        let Some(raw) = value else {
            return Ok(Self::None);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "physical" => Ok(Self::Physical),
            "fire" => Ok(Self::Fire),
            "ice" => Ok(Self::Ice),
            "energy" => Ok(Self::Energy),
            "light" => Ok(Self::Light),
            "poison" => Ok(Self::Poison),
            "" | "none" => Ok(Self::None),
            _ => Err(ItemDomainError::UnknownDamageType(raw.to_owned())),
        }
    }

    /// Appends this damage type's glyph to `title`, separated by a space.
    ///
    /// The title is returned unchanged when the glyph is empty.
    #[must_use]
    pub fn decorate(self, title: &str) -> String {
        match self.glyph() {
            "" => title.to_owned(),
            glyph => format!("{title} {glyph}"),
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_storage().unwrap_or("None"))
    }
}
