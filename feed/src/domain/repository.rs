//! Snapshot loading and feed mapping.

use std::sync::Arc;

use tracing::debug;

use super::feed::{FeedItem, UserSummary, to_feed_items, to_user_summary};
use super::ports::{UserSource, UserSourceError};
use super::snapshot::Snapshot;
use super::user::DomainUser;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Loads user snapshots from a [`UserSource`].
///
/// Holds no state besides its collaborator and page size; nothing is cached
/// between calls.
#[derive(Debug)]
pub struct FeedRepository<S> {
    source: Arc<S>,
    page_size: usize,
}

impl<S> Clone for FeedRepository<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            page_size: self.page_size,
        }
    }
}

impl<S> FeedRepository<S> {
    /// Repository fetching [`DEFAULT_PAGE_SIZE`] posts per snapshot.
    pub fn new(source: Arc<S>) -> Self {
        Self::with_page_size(source, DEFAULT_PAGE_SIZE)
    }

    /// Repository fetching `page_size` posts per snapshot.
    pub fn with_page_size(source: Arc<S>, page_size: usize) -> Self {
        Self { source, page_size }
    }

    /// Configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// See [`to_user_summary`].
    pub fn to_user_summary(&self, user: &DomainUser) -> UserSummary {
        to_user_summary(user)
    }

    /// See [`to_feed_items`].
    pub fn to_feed_items(&self, users: &[DomainUser]) -> Vec<FeedItem> {
        to_feed_items(users)
    }
}

impl<S> FeedRepository<S>
where
    S: UserSource,
{
    /// Fetch the user and one page of their posts, then checksum them.
    ///
    /// Makes exactly two source calls, user first. Source errors are returned
    /// unchanged.
    pub async fn load_snapshot(&self, user_id: i64) -> Result<Snapshot, UserSourceError> {
        let user = self.source.get_user(user_id).await?;
        let posts = self.source.get_posts(user_id, self.page_size).await?;

        let snapshot = match user {
            Some(user) => Snapshot::new(user, posts),
            None => Snapshot::missing_user(posts),
        };
        debug!(
            user_id,
            page_size = self.page_size,
            found = snapshot.user().is_some(),
            posts = snapshot.posts().len(),
            checksum = snapshot.checksum(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }
}
