//! Item lookup for Quartermaster.
//!
//! Resolves `/search_item` queries against the item catalogue: gate the
//! originating channel, classify the query as an identifier or free text,
//! dispatch it, then either list ambiguous matches or render a single item
//! card. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
