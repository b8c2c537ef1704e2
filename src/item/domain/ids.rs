//! Identifier types for the item domain.

use super::ItemDomainError;
use serde::Serialize;
use std::fmt;
use std::num::NonZeroU32;

/// Stable identifier of an item record.
///
/// Identifiers are positive integers; zero is never a valid item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(NonZeroU32);

impl ItemId {
    /// Creates an identifier from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`ItemDomainError::NonPositiveItemId`] when `value` is zero.
    pub fn new(value: u32) -> Result<Self, ItemDomainError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(ItemDomainError::NonPositiveItemId(i64::from(value)))
    }

    /// Creates an identifier from a signed storage value.
    ///
    /// # Errors
    ///
    /// Returns [`ItemDomainError::NonPositiveItemId`] when `value` is zero or
    /// negative.
    pub fn from_storage(value: i32) -> Result<Self, ItemDomainError> {
        let raw =
            u32::try_from(value).map_err(|_| ItemDomainError::NonPositiveItemId(i64::from(value)))?;
        Self::new(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discord channel snowflake a command originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(u64);

impl ChannelId {
    /// Wraps a raw channel snowflake.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw snowflake.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<&str> for ChannelId {
    type Error = ItemDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value
            .trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ItemDomainError::InvalidChannelId(value.to_owned()))
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
