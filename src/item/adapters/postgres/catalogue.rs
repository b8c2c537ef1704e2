//! `PostgreSQL` catalogue implementation.

use super::{
    models::{ItemPropertyRow, ItemRow, ItemSkillRow},
    schema::{item_properties, item_skills, items},
};
use crate::item::{
    domain::{DamageType, Item, ItemId, ItemProperty, ItemSkill},
    ports::{CatalogueError, CatalogueResult, CatalogueSession, ItemCatalogue},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// `PostgreSQL` connection pool type used by the catalogue adapter.
pub type ItemPgPool = Pool<ConnectionManager<PgConnection>>;

type PgPooledConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`CatalogueError::Unavailable`] when the pool cannot establish its
/// initial connections.
pub fn connect_pool(database_url: &str, max_size: u32) -> CatalogueResult<ItemPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(CatalogueError::unavailable)
}

/// `PostgreSQL`-backed item catalogue.
///
/// Each session checks one connection out of the pool and returns it when
/// the session is dropped.
#[derive(Debug, Clone)]
pub struct PostgresItemCatalogue {
    pool: ItemPgPool,
}

impl PostgresItemCatalogue {
    /// Creates a catalogue from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ItemPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemCatalogue for PostgresItemCatalogue {
    async fn open_session(&self) -> CatalogueResult<Box<dyn CatalogueSession>> {
        let pool = self.pool.clone();
        let connection = tokio::task::spawn_blocking(move || pool.get())
            .await
            .map_err(CatalogueError::unavailable)?
            .map_err(CatalogueError::unavailable)?;
        debug!("checked out catalogue connection");
        Ok(Box::new(PostgresCatalogueSession {
            connection: Arc::new(Mutex::new(connection)),
        }))
    }
}

struct PostgresCatalogueSession {
    connection: Arc<Mutex<PgPooledConnection>>,
}

impl PostgresCatalogueSession {
    async fn run_blocking<F, T>(&self, f: F) -> CatalogueResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CatalogueResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let connection = Arc::clone(&self.connection);
        tokio::task::spawn_blocking(move || {
            let mut guard = connection.lock().map_err(|err| {
                CatalogueError::unavailable(std::io::Error::other(err.to_string()))
            })?;
            f(&mut guard)
        })
        .await
        .map_err(CatalogueError::unavailable)?
    }
}

impl Drop for PostgresCatalogueSession {
    fn drop(&mut self) {
        debug!("returning catalogue connection to the pool");
    }
}

#[async_trait]
impl CatalogueSession for PostgresCatalogueSession {
    async fn get_item(&self, id: ItemId) -> CatalogueResult<Option<Item>> {
        let Ok(raw_id) = i32::try_from(id.get()) else {
            return Ok(None);
        };
        self.run_blocking(move |connection| {
            let row = items::table
                .filter(items::id.eq(raw_id))
                .select(ItemRow::as_select())
                .first::<ItemRow>(connection)
                .optional()
                .map_err(CatalogueError::unavailable)?;
            row.map(row_to_item).transpose()
        })
        .await
    }

    async fn search_items(&self, query: &str) -> CatalogueResult<Vec<Item>> {
        let pattern = format!("%{}%", escape_like(query.trim()));
        self.run_blocking(move |connection| {
            let rows = items::table
                .filter(items::title.ilike(pattern))
                .order((items::title.asc(), items::id.asc()))
                .select(ItemRow::as_select())
                .load::<ItemRow>(connection)
                .map_err(CatalogueError::unavailable)?;
            rows.into_iter().map(row_to_item).collect()
        })
        .await
    }

    async fn get_item_properties(&self, item: &Item) -> CatalogueResult<Vec<ItemProperty>> {
        let Ok(item_id) = i32::try_from(item.id().get()) else {
            return Ok(Vec::new());
        };
        self.run_blocking(move |connection| {
            let rows = item_properties::table
                .filter(item_properties::item_id.eq(item_id))
                .order((item_properties::position.asc(), item_properties::id.asc()))
                .select(ItemPropertyRow::as_select())
                .load::<ItemPropertyRow>(connection)
                .map_err(CatalogueError::unavailable)?;
            Ok(rows
                .into_iter()
                .map(|row| ItemProperty::new(row.name, row.value))
                .collect())
        })
        .await
    }

    async fn get_item_skills(&self, item: &Item) -> CatalogueResult<Vec<ItemSkill>> {
        let Ok(item_id) = i32::try_from(item.id().get()) else {
            return Ok(Vec::new());
        };
        self.run_blocking(move |connection| {
            let rows = item_skills::table
                .filter(item_skills::item_id.eq(item_id))
                .order((item_skills::position.asc(), item_skills::id.asc()))
                .select(ItemSkillRow::as_select())
                .load::<ItemSkillRow>(connection)
                .map_err(CatalogueError::unavailable)?;
            rows.into_iter().map(row_to_skill).collect()
        })
        .await
    }
}

fn row_to_item(row: ItemRow) -> CatalogueResult<Item> {
    let ItemRow {
        id,
        title,
        rarity,
        damage_type,
        icon_url,
    } = row;

    let parsed_id = ItemId::from_storage(id).map_err(CatalogueError::invalid_persisted_data)?;
    let parsed_rarity = u8::try_from(rarity).map_err(CatalogueError::invalid_persisted_data)?;
    let parsed_damage_type = DamageType::from_storage(damage_type.as_deref())
        .map_err(CatalogueError::invalid_persisted_data)?;

    Ok(Item::new(parsed_id, title, parsed_rarity)
        .with_damage_type(parsed_damage_type)
        .with_icon_url(icon_url))
}

fn row_to_skill(row: ItemSkillRow) -> CatalogueResult<ItemSkill> {
    let damage_type = DamageType::from_storage(row.damage_type.as_deref())
        .map_err(CatalogueError::invalid_persisted_data)?;
    Ok(ItemSkill::new(row.title, row.description).with_damage_type(damage_type))
}

/// Escapes `LIKE` wildcards so user input only matches literally.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for character in raw.chars() {
        if matches!(character, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(character);
    }
    escaped
}
