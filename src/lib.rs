//! Quartermaster: a Discord item lookup bot.
//!
//! Members of whitelisted channels look up game equipment by numeric
//! identifier or free-text query; single matches are rendered as an item
//! card, several matches as a short list to choose from.
//!
//! # Architecture
//!
//! Quartermaster follows hexagonal architecture principles:
//!
//! - **Domain**: Pure lookup types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the catalogue and chat replies
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, Discord,
//!   in-memory)
//!
//! # Modules
//!
//! - [`item`]: Query classification, lookup, and card composition
//! - [`discord`]: Serenity gateway client and slash commands
//! - [`config`]: Environment-driven configuration
//! - [`telemetry`]: Structured logging set-up

pub mod config;
pub mod discord;
pub mod item;
pub mod telemetry;
