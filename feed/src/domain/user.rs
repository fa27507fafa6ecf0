//! Domain user record.

use serde::{Deserialize, Serialize};

/// User as seen by the feed mappers.
///
/// ## Invariants
/// - Immutable once built; mappers only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainUser {
    /// Upstream identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Optional contact address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether the user is active.
    pub is_active: bool,
}

impl DomainUser {
    /// Build a user without an email address.
    ///
    /// # Examples
    /// ```
    /// use feed::domain::DomainUser;
    ///
    /// let user = DomainUser::new(7, "Ada", true).with_email("ada@example.com");
    /// assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    /// ```
    pub fn new(id: i64, name: impl Into<String>, is_active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            is_active,
        }
    }

    /// Attach an email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl From<user_factory::UserSeed> for DomainUser {
    fn from(seed: user_factory::UserSeed) -> Self {
        let id = i64::try_from(seed.index).unwrap_or(i64::MAX);
        Self::new(id, seed.display_name, seed.active).with_email(seed.email)
    }
}
