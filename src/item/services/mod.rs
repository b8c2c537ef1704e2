//! Application services for item lookup.

mod lookup;
mod replies;

pub use lookup::{
    DEFAULT_CALL_TIMEOUT, ItemLookupError, ItemLookupResult, ItemLookupService, LookupSettings,
};
pub use replies::{
    ACCESS_DENIED_MESSAGE, LOOKUP_FAILED_MESSAGE, LookupOutcome, ReplyRenderError, compose_reply,
};
