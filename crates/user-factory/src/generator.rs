//! Deterministic user generation keyed by index.
//!
//! Each user gets its own RNG seeded from the factory seed and the user's
//! index, so any single user can be rebuilt without replaying the ones before
//! it.

use fake::Fake;
use fake::faker::internet::raw::SafeEmail;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::seed::UserSeed;
use crate::validation::{is_valid_display_name, sanitize_display_name};

/// Base seed mixed with each index.
const FACTORY_SEED: u64 = 0x5EED_F00D;

/// Maximum number of attempts to draw a valid display name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Probability of a generated user being active (80%).
const ACTIVE_PROBABILITY_NUMERATOR: u32 = 4;

/// Probability denominator for the active flag.
const ACTIVE_PROBABILITY_DENOMINATOR: u32 = 5;

/// Builds the user for `index`.
///
/// The result depends only on `index`. When no valid name can be drawn from
/// the corpus the user is named `User <index>`.
///
/// # Example
///
/// ```
/// use user_factory::{create_user, is_valid_display_name};
///
/// let user = create_user(42);
/// assert_eq!(user.index, 42);
/// assert!(is_valid_display_name(&user.display_name));
/// assert_eq!(user, create_user(42));
/// ```
#[must_use]
pub fn create_user(index: u64) -> UserSeed {
    let mut rng = ChaCha8Rng::seed_from_u64(FACTORY_SEED ^ index);

    let display_name = generate_display_name(&mut rng).unwrap_or_else(|| format!("User {index}"));
    let email: String = SafeEmail(EN).fake_with_rng(&mut rng);
    let active = rng.random_ratio(ACTIVE_PROBABILITY_NUMERATOR, ACTIVE_PROBABILITY_DENOMINATOR);

    UserSeed {
        index,
        display_name,
        email,
        active,
    }
}

/// Builds users for indices `0..count`, in order.
#[must_use]
pub fn create_users(count: usize) -> Vec<UserSeed> {
    (0..count as u64).map(create_user).collect()
}

fn generate_display_name(rng: &mut ChaCha8Rng) -> Option<String> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);
        let candidate = sanitize_display_name(&format!("{first} {last}"));

        if is_valid_display_name(&candidate) {
            return Some(candidate);
        }
    }
    None
}
