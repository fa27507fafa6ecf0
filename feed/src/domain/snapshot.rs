//! Snapshot of one user and a page of their posts.

use serde::Serialize;

use super::checksum::snapshot_checksum;
use super::remote::{RemotePost, RemoteUser};

/// Result of one snapshot load.
///
/// ## Invariants
/// - `users` holds zero or one record.
/// - `checksum` is computed once in the constructors and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    users: Vec<RemoteUser>,
    posts: Vec<RemotePost>,
    checksum: i32,
}

impl Snapshot {
    /// Package a fetched user and their posts, computing the checksum.
    ///
    /// # Examples
    /// ```
    /// use feed::domain::{RemoteUser, Snapshot, snapshot_checksum};
    ///
    /// let user = RemoteUser::new(1, "Ada");
    /// let expected = snapshot_checksum(&user, &[]);
    /// let snapshot = Snapshot::new(user, Vec::new());
    /// assert_eq!(snapshot.checksum(), expected);
    /// ```
    pub fn new(user: RemoteUser, posts: Vec<RemotePost>) -> Self {
        let checksum = snapshot_checksum(&user, &posts);
        Self {
            users: vec![user],
            posts,
            checksum,
        }
    }

    /// Snapshot for an id the source does not know.
    ///
    /// The checksum is the empty-fold seed.
    pub fn missing_user(posts: Vec<RemotePost>) -> Self {
        Self {
            users: Vec::new(),
            posts,
            checksum: 1,
        }
    }

    /// Fetched users; empty when the source had no match.
    pub fn users(&self) -> &[RemoteUser] {
        &self.users
    }

    /// First fetched user, if any.
    pub fn user(&self) -> Option<&RemoteUser> {
        self.users.first()
    }

    /// Fetched posts, in source order.
    pub fn posts(&self) -> &[RemotePost] {
        &self.posts
    }

    /// Checksum over the user and posts.
    pub fn checksum(&self) -> i32 {
        self.checksum
    }
}
