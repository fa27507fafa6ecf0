//! Feed orchestration service.
//!
//! Wires the snapshot loader, the feed mapper, and the UI mapper into the
//! single path every feed takes:
//! `load_snapshot -> to_feed_items -> map_to_ui`.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::feed::to_feed_items;
use super::ports::{
    NetworkClient, NetworkClientError, NetworkRequest, UserSource, UserSourceError,
};
use super::remote::RemoteUser;
use super::repository::FeedRepository;
use super::ui::{UiMapper, UiModel};
use super::user::DomainUser;

/// How the activity flag of a fetched user is resolved.
///
/// Remote users carry no activity information.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemoteActivity {
    /// Treat every fetched user as active.
    #[default]
    AssumeActive,
    /// Activity is unknown; render fetched users as inactive.
    Unknown,
}

impl RemoteActivity {
    /// Kebab-case name used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AssumeActive => "assume-active",
            Self::Unknown => "unknown",
        }
    }

    fn is_active(self) -> bool {
        matches!(self, Self::AssumeActive)
    }
}

impl fmt::Display for RemoteActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised [`RemoteActivity`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown remote activity '{0}', expected 'assume-active' or 'unknown'")]
pub struct ParseRemoteActivityError(String);

impl FromStr for RemoteActivity {
    type Err = ParseRemoteActivityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "assume-active" => Ok(Self::AssumeActive),
            "unknown" => Ok(Self::Unknown),
            other => Err(ParseRemoteActivityError(other.to_owned())),
        }
    }
}

/// Builds presentation models for users.
pub struct FeedService<S, N> {
    repository: FeedRepository<S>,
    network: Arc<N>,
    mapper: UiMapper,
    remote_activity: RemoteActivity,
}

impl<S, N> Clone for FeedService<S, N> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            network: Arc::clone(&self.network),
            mapper: self.mapper,
            remote_activity: self.remote_activity,
        }
    }
}

impl<S, N> FeedService<S, N> {
    /// Create a service over the given repository and network client.
    pub fn new(repository: FeedRepository<S>, network: Arc<N>) -> Self {
        Self {
            repository,
            network,
            mapper: UiMapper,
            remote_activity: RemoteActivity::default(),
        }
    }

    /// Override how fetched users' activity is resolved.
    pub fn with_remote_activity(mut self, remote_activity: RemoteActivity) -> Self {
        self.remote_activity = remote_activity;
        self
    }

    /// Underlying snapshot loader.
    pub fn repository(&self) -> &FeedRepository<S> {
        &self.repository
    }

    /// Synthesise `count` users and render them as a feed.
    ///
    /// Users come from the deterministic factory, so equal counts always yield
    /// equal models.
    pub fn demo_complex_flow(&self, count: usize) -> UiModel {
        let users: Vec<DomainUser> = user_factory::create_users(count)
            .into_iter()
            .map(DomainUser::from)
            .collect();
        debug!(count = users.len(), "rendering synthetic feed");
        self.mapper.map_to_ui(&to_feed_items(&users))
    }

    fn to_domain_user(&self, user: RemoteUser) -> DomainUser {
        DomainUser::new(user.id, user.name, self.remote_activity.is_active())
    }
}

impl<S, N> FeedService<S, N>
where
    S: UserSource,
{
    /// Load a user's snapshot and render it.
    ///
    /// An unknown user yields [`UiMapper::empty_state`]. Source errors are
    /// returned unchanged; [`UiModel::from_result`] turns them into the error
    /// state when a caller wants one.
    pub async fn build_ui_for_user(&self, user_id: i64) -> Result<UiModel, UserSourceError> {
        let snapshot = self.repository.load_snapshot(user_id).await?;
        let Some(user) = snapshot.users().first().cloned() else {
            debug!(user_id, "no user in snapshot");
            return Ok(self.mapper.empty_state());
        };

        let users = [self.to_domain_user(user)];
        let model = self.mapper.map_to_ui(&to_feed_items(&users));
        debug!(
            user_id,
            checksum = snapshot.checksum(),
            rows = model.rows().len(),
            "feed rendered"
        );
        Ok(model)
    }
}

impl<S, N> FeedService<S, N>
where
    N: NetworkClient,
{
    /// Issue a bare `GET` for `path` and return the status code as received.
    pub async fn ping(&self, path: &str) -> Result<u16, NetworkClientError> {
        let response = self.network.execute(&NetworkRequest::get(path)).await?;
        debug!(path, code = response.code, "ping answered");
        Ok(response.code)
    }
}

#[cfg(test)]
#[path = "feed_service_tests.rs"]
mod tests;
