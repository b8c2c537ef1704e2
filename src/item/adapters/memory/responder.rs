//! Responder that records replies instead of sending them.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use crate::item::ports::{InteractionResponder, Reply, ResponderResult};

/// A reply event captured by [`RecordingResponder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponderEvent {
    /// A private rejection.
    Rejected(String),
    /// The interaction was deferred.
    Deferred,
    /// A follow-up reply.
    Sent(Reply),
}

/// Responder that stores every event in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingResponder {
    events: Arc<Mutex<Vec<ResponderEvent>>>,
}

impl RecordingResponder {
    /// Creates a responder with no recorded events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<ResponderEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the last follow-up reply, if any.
    #[must_use]
    pub fn last_reply(&self) -> Option<Reply> {
        self.events().into_iter().rev().find_map(|event| match event {
            ResponderEvent::Sent(reply) => Some(reply),
            ResponderEvent::Rejected(_) | ResponderEvent::Deferred => None,
        })
    }

    fn record(&self, event: ResponderEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[async_trait]
impl InteractionResponder for RecordingResponder {
    async fn reject(&self, message: &str) -> ResponderResult<()> {
        self.record(ResponderEvent::Rejected(message.to_owned()));
        Ok(())
    }

    async fn defer(&self) -> ResponderResult<()> {
        self.record(ResponderEvent::Deferred);
        Ok(())
    }

    async fn send(&self, reply: &Reply) -> ResponderResult<()> {
        self.record(ResponderEvent::Sent(reply.clone()));
        Ok(())
    }
}
