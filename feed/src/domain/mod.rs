//! Feed domain: records, checksums, mappers, and the orchestration service.
//!
//! Purpose: turn one user's fetched snapshot into a presentation model and
//! provide deterministic synthetic feeds. Nothing here performs I/O directly;
//! collaborators are reached through [`ports`].
//!
//! Public surface:
//! - `Snapshot`, `FeedRepository` — checksummed fetch of a user and posts.
//! - `UserSummary`, `FeedItem` — intermediate feed records.
//! - `UiModel`, `UiMapper` — presentation models and their canned states.
//! - `FeedService` — the end-to-end `build_ui_for_user` path.

pub mod bulk;
pub mod checksum;
pub mod feed;
pub mod ports;
pub mod remote;
pub mod repository;
pub mod service;
pub mod snapshot;
pub mod ui;
pub mod user;

pub use self::bulk::{
    UserProjection, build_many_ui_models, build_sequential_users, bulk_project_users,
    create_large_ui_model, map_to_ui_text_list, project_user,
};
pub use self::checksum::{
    ChecksumField, int_hash, rolling_checksum, snapshot_checksum, summary_checksum, text_hash,
};
pub use self::feed::{
    FeedItem, UserSummary, to_feed_items, to_user_summary, transform_users_to_summaries,
};
pub use self::remote::{RemotePost, RemoteUser};
pub use self::repository::{DEFAULT_PAGE_SIZE, FeedRepository};
pub use self::service::{FeedService, ParseRemoteActivityError, RemoteActivity};
pub use self::snapshot::Snapshot;
pub use self::ui::{UiListRow, UiMapper, UiModel, map_summaries_to_ui_items};
pub use self::user::DomainUser;
