//! Behavioural tests for the user-factory crate.
//!
//! These scenarios cover reproducibility and display name validity of the
//! generated users.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use user_factory::{UserSeed, create_user, create_users, is_valid_display_name};

/// Test world holding the requested batch and generated users.
#[derive(Default, ScenarioState)]
struct World {
    batch_size: Slot<usize>,
    generated_users: Slot<Vec<UserSeed>>,
    second_generation: Slot<Vec<UserSeed>>,
}

impl World {
    fn batch_size(&self) -> usize {
        self.batch_size.get().expect("batch size should be set")
    }

    fn users(&self) -> Vec<UserSeed> {
        self.generated_users
            .get()
            .expect("users should be generated")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a batch size of {count}")]
fn a_batch_size_of(world: &World, count: usize) {
    world.batch_size.set(count);
}

// ============================================================================
// When steps
// ============================================================================

#[when("users are generated")]
fn users_are_generated(world: &World) {
    world.generated_users.set(create_users(world.batch_size()));
}

#[when("users are generated twice")]
fn users_are_generated_twice(world: &World) {
    let count = world.batch_size();
    world.generated_users.set(create_users(count));
    world.second_generation.set(create_users(count));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("both generations produce identical users")]
fn both_generations_produce_identical_users(world: &World) {
    let second = world
        .second_generation
        .get()
        .expect("second generation should be set");
    assert_eq!(world.users(), second, "generations should be deterministic");
}

#[then("all display names satisfy the display name rules")]
fn all_display_names_satisfy_the_display_name_rules(world: &World) {
    for user in world.users() {
        assert!(
            is_valid_display_name(&user.display_name),
            "invalid display name: {}",
            user.display_name
        );
    }
}

#[then("the user at index {index} matches a directly created user")]
fn the_user_at_index_matches_a_directly_created_user(world: &World, index: u64) {
    let users = world.users();
    let generated = users
        .iter()
        .find(|user| user.index == index)
        .expect("index should be within the batch");
    assert_eq!(generated, &create_user(index));
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/user_factory.feature",
    name = "Generation is reproducible"
)]
fn generation_is_reproducible(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_factory.feature",
    name = "Generated display names are valid"
)]
fn generated_display_names_are_valid(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_factory.feature",
    name = "Users keep their identity across batch sizes"
)]
fn users_keep_their_identity_across_batch_sizes(world: World) {
    let _ = world;
}
