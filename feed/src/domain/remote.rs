//! Raw records returned by the user data source.
//!
//! These mirror the upstream JSON payloads; the domain never mutates them.

use serde::{Deserialize, Serialize};

/// User record as fetched from the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    /// Upstream identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Login handle, when the source provides one.
    #[serde(default)]
    pub username: Option<String>,
    /// Contact address, when the source provides one.
    #[serde(default)]
    pub email: Option<String>,
}

impl RemoteUser {
    /// Build a record with only the identifying fields set.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            username: None,
            email: None,
        }
    }
}

/// Post record as fetched from the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePost {
    /// Upstream identifier.
    pub id: i64,
    /// Author identifier.
    pub user_id: i64,
    /// Headline.
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub body: String,
}
