//! Deterministic synthetic user generation.
//!
//! This crate builds believable, reproducible user records for demonstration
//! flows and load generation. It knows nothing of the `feed` domain types;
//! callers convert a [`UserSeed`] into their own user type at the point of
//! use.
//!
//! # Overview
//!
//! - Every user is derived from its index alone, so `create_user(7)` always
//!   yields the same record regardless of how many users were built before.
//! - Names are drawn from an English first/last name corpus and sanitised to
//!   the display name rules in [`is_valid_display_name`].
//!
//! # Example
//!
//! ```
//! use user_factory::{create_user, create_users};
//!
//! let users = create_users(3);
//! assert_eq!(users.len(), 3);
//! assert_eq!(users[2], create_user(2));
//! ```

mod generator;
mod seed;
mod validation;

pub use generator::{create_user, create_users};
pub use seed::UserSeed;
pub use validation::{DISPLAY_NAME_MAX, DISPLAY_NAME_MIN, is_valid_display_name};
