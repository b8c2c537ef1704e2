//! In-memory item catalogue for tests and local runs.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::item::{
    domain::{Item, ItemId, ItemProperty, ItemSkill},
    ports::{CatalogueError, CatalogueResult, CatalogueSession, ItemCatalogue},
};

/// An item together with its related records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    /// The item itself.
    pub item: Item,
    /// Properties in display order.
    pub properties: Vec<ItemProperty>,
    /// Skills in display order.
    pub skills: Vec<ItemSkill>,
}

impl ItemRecord {
    /// Creates a record with no properties or skills.
    #[must_use]
    pub const fn new(item: Item) -> Self {
        Self {
            item,
            properties: Vec::new(),
            skills: Vec::new(),
        }
    }

    /// Appends a property.
    #[must_use]
    pub fn with_property(mut self, property: ItemProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// Appends a skill.
    #[must_use]
    pub fn with_skill(mut self, skill: ItemSkill) -> Self {
        self.skills.push(skill);
        self
    }
}

/// Thread-safe in-memory catalogue.
///
/// Search is a case-insensitive substring match on titles, returned in
/// insertion order. Session counters let tests observe acquisition and
/// release.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemCatalogue {
    records: Arc<RwLock<Vec<ItemRecord>>>,
    offline: Arc<AtomicBool>,
    sessions_opened: Arc<AtomicUsize>,
    sessions_active: Arc<AtomicUsize>,
}

impl InMemoryItemCatalogue {
    /// Creates an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalogue holding `records`.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = ItemRecord>) -> Self {
        let catalogue = Self::new();
        for record in records {
            catalogue.insert(record);
        }
        catalogue
    }

    /// Adds a record, replacing any record with the same item identifier.
    pub fn insert(&self, record: ItemRecord) {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let id = record.item.id();
        if let Some(existing) = records.iter_mut().find(|existing| existing.item.id() == id) {
            *existing = record;
        } else {
            records.push(record);
        }
    }

    /// Returns a snapshot of the stored records in insertion order.
    #[must_use]
    pub fn records(&self) -> Vec<ItemRecord> {
        self.records
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Makes every lookup fail with [`CatalogueError::Unavailable`] while
    /// `offline` is set.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Returns how many sessions have been opened in total.
    #[must_use]
    pub fn sessions_opened(&self) -> usize {
        self.sessions_opened.load(Ordering::SeqCst)
    }

    /// Returns how many sessions are currently held.
    #[must_use]
    pub fn sessions_active(&self) -> usize {
        self.sessions_active.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemCatalogue for InMemoryItemCatalogue {
    async fn open_session(&self) -> CatalogueResult<Box<dyn CatalogueSession>> {
        self.sessions_opened.fetch_add(1, Ordering::SeqCst);
        self.sessions_active.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(InMemorySession {
            records: Arc::clone(&self.records),
            offline: Arc::clone(&self.offline),
            active: Arc::clone(&self.sessions_active),
        }))
    }
}

struct InMemorySession {
    records: Arc<RwLock<Vec<ItemRecord>>>,
    offline: Arc<AtomicBool>,
    active: Arc<AtomicUsize>,
}

impl InMemorySession {
    fn read<T>(&self, f: impl FnOnce(&[ItemRecord]) -> T) -> CatalogueResult<T> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(CatalogueError::unavailable(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "in-memory catalogue is offline",
            )));
        }
        let records = self.records.read().map_err(|err| {
            CatalogueError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(f(&records))
    }

    fn record_for(&self, id: ItemId) -> CatalogueResult<Option<ItemRecord>> {
        self.read(|records| {
            records
                .iter()
                .find(|record| record.item.id() == id)
                .cloned()
        })
    }
}

impl Drop for InMemorySession {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CatalogueSession for InMemorySession {
    async fn get_item(&self, id: ItemId) -> CatalogueResult<Option<Item>> {
        Ok(self.record_for(id)?.map(|record| record.item))
    }

    async fn search_items(&self, query: &str) -> CatalogueResult<Vec<Item>> {
        let needle = query.trim().to_lowercase();
        self.read(|records| {
            records
                .iter()
                .filter(|record| record.item.title().to_lowercase().contains(&needle))
                .map(|record| record.item.clone())
                .collect()
        })
    }

    async fn get_item_properties(&self, item: &Item) -> CatalogueResult<Vec<ItemProperty>> {
        Ok(self
            .record_for(item.id())?
            .map(|record| record.properties)
            .unwrap_or_default())
    }

    async fn get_item_skills(&self, item: &Item) -> CatalogueResult<Vec<ItemSkill>> {
        Ok(self
            .record_for(item.id())?
            .map(|record| record.skills)
            .unwrap_or_default())
    }
}
