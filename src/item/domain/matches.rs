//! Normalisation of lookup results and the bounded match list.

use super::{Item, ItemId};
use serde::Serialize;

/// Maximum number of entries shown when a query matches several items.
pub const MAX_LISTED_MATCHES: usize = 20;

/// Lookup results normalised for routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupMatches {
    /// Nothing matched.
    None,
    /// Exactly one item matched.
    Single(Item),
    /// More than one item matched, in collaborator order.
    Multiple(Vec<Item>),
}

impl LookupMatches {
    /// Classifies a result sequence by its length.
    #[must_use]
    pub fn from_items(items: Vec<Item>) -> Self {
        if items.len() > 1 {
            return Self::Multiple(items);
        }
        items.into_iter().next().map_or(Self::None, Self::Single)
    }
}

impl From<Option<Item>> for LookupMatches {
    fn from(item: Option<Item>) -> Self {
        item.map_or(Self::None, Self::Single)
    }
}

/// One line of a disambiguation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEntry {
    /// Item identifier to re-query with.
    pub id: ItemId,
    /// Item display name.
    pub title: String,
    /// Item rarity value.
    pub rarity: u8,
}

impl From<&Item> for MatchEntry {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id(),
            title: item.title().to_owned(),
            rarity: item.rarity(),
        }
    }
}

/// Candidate list shown instead of a card when a query is ambiguous.
///
/// Holds at most [`MAX_LISTED_MATCHES`] entries in input order; the rest
/// are dropped without notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchList {
    entries: Vec<MatchEntry>,
}

impl MatchList {
    /// Builds the list from the first [`MAX_LISTED_MATCHES`] items.
    #[must_use]
    pub fn from_items(items: &[Item]) -> Self {
        Self {
            entries: items
                .iter()
                .take(MAX_LISTED_MATCHES)
                .map(MatchEntry::from)
                .collect(),
        }
    }

    /// Returns the listed entries.
    #[must_use]
    pub fn entries(&self) -> &[MatchEntry] {
        &self.entries
    }

    /// Returns the number of listed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
