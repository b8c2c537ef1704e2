//! Classification of raw lookup queries.

use super::ItemId;

/// A classified lookup query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemQuery {
    /// The query is a positive integer identifier.
    Id(ItemId),
    /// The query is syntactically an identifier but exceeds the identifier
    /// range, so no item can carry it.
    OutOfRangeId,
    /// The query is free text passed to search.
    Text(String),
}

impl ItemQuery {
    /// Classifies `raw` as an identifier or free text.
    ///
    /// Only the whole-string form `[1-9][0-9]*` is an identifier. Leading
    /// zeros (`"007"`), zero itself, signs, whitespace and non-ASCII digits
    /// all yield [`ItemQuery::Text`]. The check is purely syntactic.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        if !is_identifier_syntax(raw) {
            return Self::Text(raw.to_owned());
        }
        raw.parse::<u32>()
            .ok()
            .and_then(|value| ItemId::new(value).ok())
            .map_or(Self::OutOfRangeId, Self::Id)
    }

    /// Returns `true` when the query was classified as an identifier.
    #[must_use]
    pub const fn is_identifier(&self) -> bool {
        matches!(self, Self::Id(_) | Self::OutOfRangeId)
    }
}

fn is_identifier_syntax(raw: &str) -> bool {
    let mut characters = raw.chars();
    let Some(first) = characters.next() else {
        return false;
    };
    matches!(first, '1'..='9') && characters.all(|character| character.is_ascii_digit())
}
