//! Channel access control.

use super::ChannelId;
use std::collections::HashSet;

/// Immutable set of channels allowed to run lookup commands.
///
/// Built once at start-up and shared read-only between interactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelWhitelist {
    channels: HashSet<ChannelId>,
}

impl ChannelWhitelist {
    /// Creates a whitelist from channel identifiers.
    #[must_use]
    pub fn new(channels: impl IntoIterator<Item = ChannelId>) -> Self {
        Self {
            channels: channels.into_iter().collect(),
        }
    }

    /// Returns `true` when commands from `channel` may proceed.
    #[must_use]
    pub fn allows(&self, channel: ChannelId) -> bool {
        self.channels.contains(&channel)
    }

    /// Returns the number of whitelisted channels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns `true` when no channel is whitelisted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

/// A lookup command as received from the chat platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    channel: ChannelId,
    query: String,
}

impl CommandInvocation {
    /// Creates an invocation for `query` sent from `channel`.
    #[must_use]
    pub fn new(channel: ChannelId, query: impl Into<String>) -> Self {
        Self {
            channel,
            query: query.into(),
        }
    }

    /// Returns the originating channel.
    #[must_use]
    pub const fn channel(&self) -> ChannelId {
        self.channel
    }

    /// Returns the raw query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}
