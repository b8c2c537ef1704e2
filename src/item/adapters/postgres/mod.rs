//! `PostgreSQL` adapters for the item catalogue.

mod catalogue;
mod models;
mod schema;

pub use catalogue::{ItemPgPool, PostgresItemCatalogue, connect_pool};
