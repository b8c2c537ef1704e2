//! Port contracts for item lookup.
//!
//! Ports define infrastructure-agnostic interfaces used by the lookup
//! service: the item catalogue it reads from and the responder it replies
//! through.

pub mod catalogue;
pub mod responder;

pub use catalogue::{
    CatalogueError, CatalogueOperation, CatalogueResult, CatalogueSession, ItemCatalogue,
};
pub use responder::{InteractionResponder, Reply, ResponderError, ResponderResult};
