//! User summaries and feed items.
//!
//! Feed item ids are the enumeration index of the input slice, not the
//! upstream user id, so a feed of `n` users always carries ids `0..n`.

use serde::{Deserialize, Serialize};

use super::checksum::summary_checksum;
use super::user::DomainUser;

const ACTIVE_LABEL: &str = "Active";
const INACTIVE_LABEL: &str = "Inactive";

/// Compact view of a user carried inside feed items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Upstream user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// [`summary_checksum`] of the name.
    pub checksum: i32,
    /// Whether the user is active.
    pub is_active: bool,
}

/// One entry of a user feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    /// Position in the feed, starting at zero.
    pub id: i64,
    /// `User <name>`.
    pub title: String,
    /// Activity label.
    pub subtitle: Option<String>,
    /// Summary of the originating user.
    pub summary: UserSummary,
}

/// Label shown for an activity flag.
pub(crate) fn activity_label(is_active: bool) -> &'static str {
    if is_active {
        ACTIVE_LABEL
    } else {
        INACTIVE_LABEL
    }
}

/// Summarise a user; the checksum depends on the name alone.
///
/// # Examples
/// ```
/// use feed::domain::{DomainUser, summary_checksum, to_user_summary};
///
/// let summary = to_user_summary(&DomainUser::new(9, "Ada", true));
/// assert_eq!(summary.checksum, summary_checksum("Ada"));
/// ```
pub fn to_user_summary(user: &DomainUser) -> UserSummary {
    UserSummary {
        id: user.id,
        name: user.name.clone(),
        checksum: summary_checksum(&user.name),
        is_active: user.is_active,
    }
}

/// Map users to feed items, preserving order.
///
/// # Examples
/// ```
/// use feed::domain::{DomainUser, to_feed_items};
///
/// let items = to_feed_items(&[DomainUser::new(40, "Ada", false)]);
/// assert_eq!(items[0].id, 0);
/// assert_eq!(items[0].title, "User Ada");
/// assert_eq!(items[0].subtitle.as_deref(), Some("Inactive"));
/// ```
pub fn to_feed_items(users: &[DomainUser]) -> Vec<FeedItem> {
    users
        .iter()
        .zip(0_i64..)
        .map(|(user, position)| {
            let summary = to_user_summary(user);
            FeedItem {
                id: position,
                title: format!("User {}", summary.name),
                subtitle: Some(activity_label(summary.is_active).to_owned()),
                summary,
            }
        })
        .collect()
}

/// Summarise every user, preserving order.
pub fn transform_users_to_summaries(users: &[DomainUser]) -> Vec<UserSummary> {
    users.iter().map(to_user_summary).collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::bulk::build_sequential_users;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(7)]
    #[case(64)]
    fn feed_ids_are_dense_and_ordered(#[case] count: usize) {
        let items = to_feed_items(&build_sequential_users(count));

        let ids: Vec<i64> = items.iter().map(|item| item.id).collect();
        let expected: Vec<i64> = (0..).take(count).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn feed_ids_ignore_upstream_ids() {
        let users = [
            DomainUser::new(500, "Ada", true),
            DomainUser::new(12, "Grace", false),
        ];
        let items = to_feed_items(&users);

        assert_eq!(items[0].id, 0);
        assert_eq!(items[0].summary.id, 500);
        assert_eq!(items[1].id, 1);
        assert_eq!(items[1].summary.id, 12);
    }

    #[rstest]
    #[case(true, "Active")]
    #[case(false, "Inactive")]
    fn subtitle_reflects_activity(#[case] is_active: bool, #[case] expected: &str) {
        let items = to_feed_items(&[DomainUser::new(1, "Ada", is_active)]);
        assert_eq!(items[0].subtitle.as_deref(), Some(expected));
        assert_eq!(items[0].summary.is_active, is_active);
    }

    #[test]
    fn summary_checksum_ignores_other_fields() {
        let left = to_user_summary(&DomainUser::new(1, "Ada", true));
        let right = to_user_summary(&DomainUser::new(2, "Ada", false).with_email("a@b.c"));
        assert_eq!(left.checksum, right.checksum);
    }

    #[test]
    fn transform_preserves_order_and_length() {
        let users = build_sequential_users(5);
        let summaries = transform_users_to_summaries(&users);

        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["User-0", "User-1", "User-2", "User-3", "User-4"]);
    }

    #[test]
    fn empty_input_yields_empty_feed() {
        assert!(to_feed_items(&[]).is_empty());
        assert!(transform_users_to_summaries(&[]).is_empty());
    }
}
