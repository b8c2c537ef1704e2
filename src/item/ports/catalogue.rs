//! Catalogue port for item persistence and search.
//!
//! Lookups happen inside a [`CatalogueSession`] scoped to one interaction.
//! Dropping the session releases whatever the adapter holds, so release is
//! guaranteed on every exit path.

use crate::item::domain::{Item, ItemId, ItemProperty, ItemSkill};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for catalogue operations.
pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Source of per-interaction catalogue sessions.
#[async_trait]
pub trait ItemCatalogue: Send + Sync {
    /// Acquires a session for one interaction.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Unavailable`] when no connection can be
    /// acquired.
    async fn open_session(&self) -> CatalogueResult<Box<dyn CatalogueSession>>;
}

/// Lookups available within an open catalogue session.
#[async_trait]
pub trait CatalogueSession: Send + Sync {
    /// Fetches a single item by identifier.
    ///
    /// Returns `None` when the item does not exist.
    async fn get_item(&self, id: ItemId) -> CatalogueResult<Option<Item>>;

    /// Searches items by free text.
    ///
    /// Results are returned in the catalogue's relevance order.
    async fn search_items(&self, query: &str) -> CatalogueResult<Vec<Item>>;

    /// Fetches the properties of `item` in stable display order.
    async fn get_item_properties(&self, item: &Item) -> CatalogueResult<Vec<ItemProperty>>;

    /// Fetches the skills of `item` in stable display order.
    async fn get_item_skills(&self, item: &Item) -> CatalogueResult<Vec<ItemSkill>>;
}

/// Catalogue operation names, used when reporting deadlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogueOperation {
    /// Session acquisition.
    OpenSession,
    /// Single item fetch.
    GetItem,
    /// Free-text search.
    SearchItems,
    /// Property fetch.
    GetItemProperties,
    /// Skill fetch.
    GetItemSkills,
}

impl fmt::Display for CatalogueOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OpenSession => "open_session",
            Self::GetItem => "get_item",
            Self::SearchItems => "search_items",
            Self::GetItemProperties => "get_item_properties",
            Self::GetItemSkills => "get_item_skills",
        })
    }
}

/// Errors returned by catalogue implementations.
#[derive(Debug, Clone, Error)]
pub enum CatalogueError {
    /// The backing store could not be reached or the query failed.
    #[error("catalogue unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// The operation did not complete before its deadline.
    #[error("catalogue operation {operation} timed out after {after:?}")]
    TimedOut {
        /// Operation that stalled.
        operation: CatalogueOperation,
        /// Deadline that elapsed.
        after: Duration,
    },
}

impl CatalogueError {
    /// Wraps a connectivity or query error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }
}
