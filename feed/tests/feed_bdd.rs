//! Behavioural tests for the feed pipeline.
//!
//! Scenarios drive the synthetic builders and the feed service over
//! in-memory user sources.

use std::sync::Arc;

use async_trait::async_trait;
use feed::domain::ports::{
    FixtureNetworkClient, FixtureUserSource, UserSource, UserSourceError,
};
use feed::domain::{
    DomainUser, FeedItem, FeedRepository, FeedService, RemotePost, RemoteUser, UiMapper, UiModel,
    UserSummary, build_sequential_users, create_large_ui_model, summary_checksum, to_feed_items,
    transform_users_to_summaries,
};
use futures::executor::block_on;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// User source whose every call fails to connect.
struct OfflineUserSource;

#[async_trait]
impl UserSource for OfflineUserSource {
    async fn get_user(&self, _id: i64) -> Result<Option<RemoteUser>, UserSourceError> {
        Err(UserSourceError::connection("source offline"))
    }

    async fn get_posts(
        &self,
        _id: i64,
        _page_size: usize,
    ) -> Result<Vec<RemotePost>, UserSourceError> {
        Err(UserSourceError::connection("source offline"))
    }
}

/// Test world shared by the feed scenarios.
#[derive(Default, ScenarioState)]
struct World {
    users: Slot<Vec<DomainUser>>,
    items: Slot<Vec<FeedItem>>,
    summaries: Slot<Vec<UserSummary>>,
    second_summaries: Slot<Vec<UserSummary>>,
    model: Slot<UiModel>,
    offline: Slot<bool>,
    outcome: Slot<Result<UiModel, UserSourceError>>,
}

impl World {
    fn users(&self) -> Vec<DomainUser> {
        self.users.get().expect("users should be built")
    }

    fn model(&self) -> UiModel {
        self.model.get().expect("model should be built")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).collect()
}

fn build_feed(world: &World, user_id: i64) {
    let outcome = if world.offline.get().unwrap_or(false) {
        let repository = FeedRepository::new(Arc::new(OfflineUserSource));
        let service = FeedService::new(repository, Arc::new(FixtureNetworkClient::default()));
        block_on(service.build_ui_for_user(user_id))
    } else {
        let repository = FeedRepository::new(Arc::new(FixtureUserSource::default()));
        let service = FeedService::new(repository, Arc::new(FixtureNetworkClient::default()));
        block_on(service.build_ui_for_user(user_id))
    };
    if let Ok(model) = &outcome {
        world.model.set(model.clone());
    }
    world.outcome.set(outcome);
}

// ============================================================================
// Given steps
// ============================================================================

#[given("{count} sequential users")]
fn sequential_users(world: &World, count: usize) {
    world.users.set(build_sequential_users(count));
}

#[given("a fixture user source")]
fn a_fixture_user_source(world: &World) {
    world.offline.set(false);
}

#[given("a user source that is offline")]
fn a_user_source_that_is_offline(world: &World) {
    world.offline.set(true);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the users are mapped to feed items")]
fn the_users_are_mapped_to_feed_items(world: &World) {
    world.items.set(to_feed_items(&world.users()));
}

#[when("a large model of {count} rows is built")]
fn a_large_model_is_built(world: &World, count: usize) {
    world.model.set(create_large_ui_model(count));
}

#[when("the users are summarised twice")]
fn the_users_are_summarised_twice(world: &World) {
    let users = world.users();
    world.summaries.set(transform_users_to_summaries(&users));
    world.second_summaries.set(transform_users_to_summaries(&users));
}

#[when("the users are rendered through feed items")]
fn the_users_are_rendered_through_feed_items(world: &World) {
    world.model.set(UiMapper.map_to_ui(&to_feed_items(&world.users())));
}

#[when("the feed for user {user_id} is built")]
fn the_feed_for_user_is_built(world: &World, user_id: i64) {
    build_feed(world, user_id);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the feed item ids are 0 to {last} in order")]
fn the_feed_item_ids_are_in_order(world: &World, last: i64) {
    let items = world.items.get().expect("items should be mapped");
    let ids: Vec<i64> = items.iter().map(|item| item.id).collect();
    let expected: Vec<i64> = (0..=last).collect();
    assert_eq!(ids, expected);
}

#[then("the user activity flags are {flags}")]
fn the_user_activity_flags_are(world: &World, flags: String) {
    let expected: Vec<bool> = split_list(&flags)
        .into_iter()
        .map(|flag| flag.parse().expect("boolean flag"))
        .collect();
    let actual: Vec<bool> = world.users().iter().map(|user| user.is_active).collect();
    assert_eq!(actual, expected);
}

#[then("the user names are {names}")]
fn the_user_names_are(world: &World, names: String) {
    let users = world.users();
    let actual: Vec<&str> = users.iter().map(|user| user.name.as_str()).collect();
    assert_eq!(actual, split_list(&names));
}

#[then("the model has {count} rows")]
fn the_model_has_rows(world: &World, count: usize) {
    assert_eq!(world.model().rows().len(), count);
}

#[then("row {index} is titled {title} and is selected")]
fn row_is_titled_and_selected(world: &World, index: usize, title: String) {
    let model = world.model();
    let row = model.rows().get(index).expect("row should exist");
    assert_eq!(row.title, title);
    assert!(row.selected, "row {index} should be selected");
}

#[then("row {index} is titled {title} and is unselected")]
fn row_is_titled_and_not_selected(world: &World, index: usize, title: String) {
    let model = world.model();
    let row = model.rows().get(index).expect("row should exist");
    assert_eq!(row.title, title);
    assert!(!row.selected, "row {index} should not be selected");
}

#[then("every summary checksum matches the checksum of its name")]
fn every_summary_checksum_matches(world: &World) {
    let summaries = world.summaries.get().expect("summaries should be built");
    for summary in summaries {
        assert_eq!(summary.checksum, summary_checksum(&summary.name));
    }
}

#[then("both summaries are identical")]
fn both_summaries_are_identical(world: &World) {
    let first = world.summaries.get().expect("first summaries");
    let second = world.second_summaries.get().expect("second summaries");
    assert_eq!(first, second);
}

#[then("every row selection matches its user's activity")]
fn every_row_selection_matches(world: &World) {
    let model = world.model();
    for (row, user) in model.rows().iter().zip(world.users()) {
        assert_eq!(row.selected, user.is_active);
    }
}

#[then("the model header is {header}")]
fn the_model_header_is(world: &World, header: String) {
    assert_eq!(world.model().header(), header);
}

#[then("the model equals the empty state")]
fn the_model_equals_the_empty_state(world: &World) {
    assert_eq!(world.model(), UiMapper.empty_state());
}

#[then("building the feed fails with a connection error")]
fn building_the_feed_fails(world: &World) {
    let outcome = world.outcome.get().expect("feed should be attempted");
    let err = outcome.expect_err("feed should fail");
    assert!(matches!(err, UserSourceError::Connection { .. }));
}

#[then("the failure renders as the error state")]
fn the_failure_renders_as_the_error_state(world: &World) {
    let outcome = world.outcome.get().expect("feed should be attempted");
    let model = UiModel::from_result(outcome);
    assert_eq!(model.header(), "Error");
    assert_eq!(
        model.error(),
        Some("user source connection failed: source offline")
    );
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/feed.feature",
    name = "Sequential users alternate activity by index"
)]
fn sequential_users_alternate_activity(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/feed.feature",
    name = "Large models alternate row selection"
)]
fn large_models_alternate_selection(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/feed.feature",
    name = "Summary checksums depend on the name alone"
)]
fn summary_checksums_depend_on_name(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/feed.feature",
    name = "Mapped rows mirror user activity"
)]
fn mapped_rows_mirror_activity(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/feed.feature",
    name = "Rendering a known user yields one row"
)]
fn rendering_a_known_user(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/feed.feature",
    name = "Rendering an unknown user yields the empty state"
)]
fn rendering_an_unknown_user(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/feed.feature",
    name = "Source failures reach the caller"
)]
fn source_failures_reach_the_caller(world: World) {
    let _ = world;
}
