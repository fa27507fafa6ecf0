//! Feed configuration loaded via OrthoConfig.
//!
//! Values come from `FEED_*` environment variables, configuration files, and
//! command-line flags. Unset values fall back to the defaults below.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::{DEFAULT_PAGE_SIZE, RemoteActivity};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DEMO_USER_ID: i64 = 1;
const DEFAULT_DEMO_USERS: usize = 5;
const DEFAULT_ENABLE_LOGGING: bool = true;

/// Settings for building feeds and wiring their collaborators.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FEED")]
pub struct FeedSettings {
    /// Number of posts fetched per snapshot.
    pub page_size: Option<usize>,
    /// Emit structured logs.
    pub enable_logging: Option<bool>,
    /// How fetched users' activity is resolved.
    pub remote_activity: Option<RemoteActivity>,
    /// Base URL of the user source; fixtures are used when unset.
    pub base_url: Option<String>,
    /// HTTP request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// User rendered by the demo.
    pub demo_user_id: Option<i64>,
    /// Number of synthetic users rendered by the demo.
    pub demo_users: Option<usize>,
}

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum FeedSettingsError {
    /// `base_url` is not an absolute URL.
    #[error("invalid base url '{value}': {source}")]
    InvalidBaseUrl {
        /// Configured value.
        value: String,
        /// Parse failure.
        source: url::ParseError,
    },
}

impl FeedSettings {
    /// Return the configured page size, falling back to the default.
    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Return whether structured logging is enabled, falling back to the
    /// default.
    pub fn enable_logging(&self) -> bool {
        self.enable_logging.unwrap_or(DEFAULT_ENABLE_LOGGING)
    }

    /// Return the configured activity policy, falling back to the default.
    pub fn remote_activity(&self) -> RemoteActivity {
        self.remote_activity.unwrap_or_default()
    }

    /// Return the request timeout, falling back to the default.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Return the demo user id, falling back to the default.
    pub fn demo_user_id(&self) -> i64 {
        self.demo_user_id.unwrap_or(DEFAULT_DEMO_USER_ID)
    }

    /// Return the synthetic user count, falling back to the default.
    pub fn demo_users(&self) -> usize {
        self.demo_users.unwrap_or(DEFAULT_DEMO_USERS)
    }

    /// Parse the configured base URL, if any.
    ///
    /// # Errors
    ///
    /// Returns [`FeedSettingsError::InvalidBaseUrl`] when the value is not an
    /// absolute URL.
    pub fn base_url(&self) -> Result<Option<Url>, FeedSettingsError> {
        self.base_url
            .as_deref()
            .map(|value| {
                Url::parse(value).map_err(|source| FeedSettingsError::InvalidBaseUrl {
                    value: value.to_owned(),
                    source,
                })
            })
            .transpose()
    }
}
