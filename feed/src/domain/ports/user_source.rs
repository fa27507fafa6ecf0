//! Driven port for fetching users and their posts.
//!
//! The repository makes exactly two calls per snapshot through this port and
//! never handles its errors; failures reach the caller unchanged.

use async_trait::async_trait;

use crate::domain::{RemotePost, RemoteUser};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user data source adapters.
    pub enum UserSourceError {
        /// The source could not be reached.
        Connection { message: String } => "user source connection failed: {message}",
        /// The source answered with an unexpected status.
        Status { code: u16, message: String } => "user source returned status {code}: {message}",
        /// The source answered with a payload that could not be decoded.
        Decode { message: String } => "user source response decode failed: {message}",
    }
}

/// Port for reading users and posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch one user; `None` when the source has no user with this id.
    async fn get_user(&self, id: i64) -> Result<Option<RemoteUser>, UserSourceError>;

    /// Fetch up to `page_size` posts written by the user.
    async fn get_posts(&self, id: i64, page_size: usize)
    -> Result<Vec<RemotePost>, UserSourceError>;
}

/// Deterministic in-memory source for demos and tests.
///
/// Users with ids in `1..=user_count` exist and are named `User <id>`; every
/// user has `posts_per_user` posts. Other ids are unknown.
#[derive(Debug, Clone, Copy)]
pub struct FixtureUserSource {
    user_count: i64,
    posts_per_user: usize,
}

impl FixtureUserSource {
    /// Default number of known users.
    pub const DEFAULT_USER_COUNT: i64 = 10;
    /// Default number of posts per user.
    pub const DEFAULT_POSTS_PER_USER: usize = 25;

    /// Build a fixture with explicit sizes.
    pub fn new(user_count: i64, posts_per_user: usize) -> Self {
        Self {
            user_count,
            posts_per_user,
        }
    }

    fn knows(&self, id: i64) -> bool {
        (1..=self.user_count).contains(&id)
    }
}

impl Default for FixtureUserSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_USER_COUNT, Self::DEFAULT_POSTS_PER_USER)
    }
}

#[async_trait]
impl UserSource for FixtureUserSource {
    async fn get_user(&self, id: i64) -> Result<Option<RemoteUser>, UserSourceError> {
        if !self.knows(id) {
            return Ok(None);
        }
        let mut user = RemoteUser::new(id, format!("User {id}"));
        user.username = Some(format!("user{id}"));
        user.email = Some(format!("user{id}@example.com"));
        Ok(Some(user))
    }

    async fn get_posts(
        &self,
        id: i64,
        page_size: usize,
    ) -> Result<Vec<RemotePost>, UserSourceError> {
        if !self.knows(id) {
            return Ok(Vec::new());
        }
        let first_post_id = (id - 1).saturating_mul(1_000);
        let posts = (1_i64..)
            .take(self.posts_per_user.min(page_size))
            .map(|sequence| RemotePost {
                id: first_post_id + sequence,
                user_id: id,
                title: format!("Post {sequence} by user {id}"),
                body: format!("Body of post {sequence}"),
            })
            .collect();
        Ok(posts)
    }
}
