//! Reply port towards the chat platform.

use crate::item::domain::ItemCard;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for responder operations.
pub type ResponderResult<T> = Result<T, ResponderError>;

/// Reply sent after the interaction has been deferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain markdown text.
    Text(String),
    /// A structured item card.
    Card(ItemCard),
}

/// Emits replies for a single interaction.
///
/// Implementations answer exactly one command; the service calls either
/// [`reject`](Self::reject) alone, or [`defer`](Self::defer) followed by
/// [`send`](Self::send).
#[async_trait]
pub trait InteractionResponder: Send + Sync {
    /// Sends a message visible only to the caller and ends the interaction.
    async fn reject(&self, message: &str) -> ResponderResult<()>;

    /// Acknowledges the interaction with a "processing" state.
    async fn defer(&self) -> ResponderResult<()>;

    /// Sends the final reply as a follow-up.
    async fn send(&self, reply: &Reply) -> ResponderResult<()>;
}

/// Errors raised while delivering replies.
#[derive(Debug, Clone, Error)]
#[error("failed to deliver reply: {0}")]
pub struct ResponderError(Arc<dyn std::error::Error + Send + Sync>);

impl ResponderError {
    /// Wraps a transport error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}
