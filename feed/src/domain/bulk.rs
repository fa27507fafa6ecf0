//! Deterministic bulk builders and projections.
//!
//! Every value here is derived from its index alone, which keeps synthetic
//! feeds reproducible across runs.

use serde::{Deserialize, Serialize};

use super::feed::UserSummary;
use super::ui::{UiModel, map_summaries_to_ui_items};
use super::user::DomainUser;

/// Size cycle used by [`build_many_ui_models`].
const MODEL_SIZE_CYCLE: usize = 20;

/// Multiplier for synthetic summary checksums.
const SYNTHETIC_CHECKSUM_FACTOR: i32 = 17;

/// Narrow view of a user for list rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProjection {
    /// Upstream user identifier.
    pub id: i64,
    /// Display label, the user's name.
    pub label: String,
    /// Whether the user is active.
    pub active: bool,
}

/// Build `count` users with ids `0..count` and names `User-<i>`.
///
/// Every third user, starting with the first, is inactive.
///
/// # Examples
/// ```
/// use feed::domain::build_sequential_users;
///
/// let users = build_sequential_users(3);
/// let active: Vec<bool> = users.iter().map(|u| u.is_active).collect();
/// assert_eq!(active, [false, true, true]);
/// ```
pub fn build_sequential_users(count: usize) -> Vec<DomainUser> {
    (0..count)
        .zip(0_i64..)
        .map(|(index, id)| DomainUser::new(id, format!("User-{index}"), index % 3 != 0))
        .collect()
}

/// Build a populated model of `count` synthetic rows without going through
/// feed items.
///
/// Even positions are selected.
pub fn create_large_ui_model(count: usize) -> UiModel {
    let summaries: Vec<UserSummary> = (0..count)
        .zip(0_i64..)
        .map(|(index, id)| UserSummary {
            id,
            name: format!("User-{index}"),
            checksum: synthetic_checksum(id),
            is_active: index % 2 == 0,
        })
        .collect();

    UiModel::Populated {
        header: format!("Large model {count}"),
        rows: map_summaries_to_ui_items(&summaries),
    }
}

/// Build `repeat` large models whose sizes cycle through `1..=20`.
pub fn build_many_ui_models(repeat: usize) -> Vec<UiModel> {
    (0..repeat)
        .map(|index| create_large_ui_model(index % MODEL_SIZE_CYCLE + 1))
        .collect()
}

/// Project one user.
pub fn project_user(user: &DomainUser) -> UserProjection {
    UserProjection {
        id: user.id,
        label: user.name.clone(),
        active: user.is_active,
    }
}

/// Project every user, preserving order.
pub fn bulk_project_users(users: &[DomainUser]) -> Vec<UserProjection> {
    users.iter().map(project_user).collect()
}

/// `User: <name>` labels, one per user.
pub fn map_to_ui_text_list(users: &[DomainUser]) -> Vec<String> {
    users
        .iter()
        .map(|user| format!("User: {}", user.name))
        .collect()
}

fn synthetic_checksum(id: i64) -> i32 {
    i32::try_from(id)
        .unwrap_or(i32::MAX)
        .wrapping_mul(SYNTHETIC_CHECKSUM_FACTOR)
}
