//! Error types for item domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing item domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemDomainError {
    /// Item identifiers start at one.
    #[error("item identifier must be a positive integer, got {0}")]
    NonPositiveItemId(i64),

    /// The persisted damage type is not part of the closed enumeration.
    #[error("unknown damage type: {0}")]
    UnknownDamageType(String),

    /// A channel identifier could not be parsed as a snowflake.
    #[error("invalid channel identifier '{0}'")]
    InvalidChannelId(String),
}
