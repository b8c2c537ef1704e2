//! In-memory adapters for item lookup tests.

mod catalogue;
mod responder;

pub use catalogue::{InMemoryItemCatalogue, ItemRecord};
pub use responder::{RecordingResponder, ResponderEvent};
