//! Generated user record.

use serde::{Deserialize, Serialize};

/// A synthetic user produced by the factory.
///
/// # Example
///
/// ```
/// use user_factory::UserSeed;
///
/// let user = UserSeed {
///     index: 4,
///     display_name: "Ada Lovelace".to_owned(),
///     email: "ada@example.com".to_owned(),
///     active: true,
/// };
///
/// assert_eq!(user.display_name, "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSeed {
    /// Position the user was generated for; doubles as its identifier.
    pub index: u64,
    /// Human-readable display name.
    pub display_name: String,
    /// Contact address.
    pub email: String,
    /// Whether the user is currently active.
    pub active: bool,
}
