//! Process configuration.
//!
//! Settings come from the environment, optionally seeded from a `.env` file
//! in the working directory. Parsing goes through a lookup function so tests
//! can supply values without touching the process environment.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::item::{
    domain::{ChannelId, ChannelWhitelist},
    services::{DEFAULT_CALL_TIMEOUT, LookupSettings},
};

/// Bot token variable.
pub const DISCORD_TOKEN_VAR: &str = "DISCORD_TOKEN";
/// Comma-separated channel whitelist variable.
pub const CHANNELS_WHITELIST_VAR: &str = "CHANNELS_WHITELIST";
/// `PostgreSQL` connection URL variable.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Connection pool size variable.
pub const DATABASE_POOL_SIZE_VAR: &str = "DATABASE_POOL_SIZE";
/// Per-call catalogue deadline variable, in seconds.
pub const LOOKUP_TIMEOUT_SECS_VAR: &str = "LOOKUP_TIMEOUT_SECS";
/// Whether to register commands once the gateway is ready.
pub const SYNC_COMMANDS_ON_STARTUP_VAR: &str = "SYNC_COMMANDS_ON_STARTUP";

/// Connection pool size used when none is configured.
pub const DEFAULT_POOL_SIZE: u32 = 5;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable holds a value that cannot be parsed.
    #[error("invalid value for {variable}: {reason}")]
    Invalid {
        /// Offending variable.
        variable: &'static str,
        /// Parse failure reason.
        reason: String,
    },

    /// The `.env` file exists but could not be read.
    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

/// Fully parsed bot configuration.
#[derive(Clone)]
pub struct BotConfig {
    discord_token: String,
    whitelist: ChannelWhitelist,
    database_url: String,
    pool_size: u32,
    call_timeout: Duration,
    sync_commands_on_startup: bool,
}

impl BotConfig {
    /// Loads configuration from `.env` and the process environment.
    ///
    /// A missing `.env` file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `.env` is unreadable or a variable is
    /// missing or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(error) = dotenvy::dotenv()
            && !error.not_found()
        {
            return Err(error.into());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for absent required variables and
    /// [`ConfigError::Invalid`] for malformed values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |variable: &'static str| {
            lookup(variable)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(variable))
        };

        let discord_token = required(DISCORD_TOKEN_VAR)?;
        let whitelist = parse_whitelist(&required(CHANNELS_WHITELIST_VAR)?)?;
        let database_url = required(DATABASE_URL_VAR)?;

        let pool_size = lookup(DATABASE_POOL_SIZE_VAR)
            .map(|raw| parse_positive(DATABASE_POOL_SIZE_VAR, &raw))
            .transpose()?
            .map(|size| {
                u32::try_from(size).map_err(|_| ConfigError::Invalid {
                    variable: DATABASE_POOL_SIZE_VAR,
                    reason: format!("pool size {size} is too large"),
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_POOL_SIZE);
        let call_timeout = lookup(LOOKUP_TIMEOUT_SECS_VAR)
            .map(|raw| parse_positive(LOOKUP_TIMEOUT_SECS_VAR, &raw))
            .transpose()?
            .map_or(DEFAULT_CALL_TIMEOUT, Duration::from_secs);
        let sync_commands_on_startup = lookup(SYNC_COMMANDS_ON_STARTUP_VAR)
            .map(|raw| parse_flag(SYNC_COMMANDS_ON_STARTUP_VAR, &raw))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            discord_token,
            whitelist,
            database_url,
            pool_size,
            call_timeout,
            sync_commands_on_startup,
        })
    }

    /// Returns the bot token.
    #[must_use]
    pub fn discord_token(&self) -> &str {
        &self.discord_token
    }

    /// Returns the channel whitelist.
    #[must_use]
    pub const fn whitelist(&self) -> &ChannelWhitelist {
        &self.whitelist
    }

    /// Returns the `PostgreSQL` connection URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the connection pool size.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }

    /// Returns the per-call catalogue deadline.
    #[must_use]
    pub const fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    /// Returns whether commands are registered when the gateway is ready.
    #[must_use]
    pub const fn sync_commands_on_startup(&self) -> bool {
        self.sync_commands_on_startup
    }

    /// Builds the lookup pipeline settings.
    #[must_use]
    pub fn lookup_settings(&self) -> LookupSettings {
        LookupSettings::new(self.whitelist.clone()).with_call_timeout(self.call_timeout)
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("discord_token", &"<redacted>")
            .field("whitelist", &self.whitelist)
            .field("database_url", &"<redacted>")
            .field("pool_size", &self.pool_size)
            .field("call_timeout", &self.call_timeout)
            .field("sync_commands_on_startup", &self.sync_commands_on_startup)
            .finish()
    }
}

fn parse_whitelist(raw: &str) -> Result<ChannelWhitelist, ConfigError> {
    let channels = raw
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            ChannelId::try_from(segment).map_err(|error| ConfigError::Invalid {
                variable: CHANNELS_WHITELIST_VAR,
                reason: error.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ChannelWhitelist::new(channels))
}

fn parse_positive(variable: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::Invalid {
            variable,
            reason: format!("expected a positive integer, got '{raw}'"),
        }),
    }
}

fn parse_flag(variable: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            variable,
            reason: format!("expected a boolean, got '{raw}'"),
        }),
    }
}
