//! User feed snapshots, checksums, and presentation models.
//!
//! The [`domain`] module owns every record and mapping; [`outbound`] holds the
//! HTTP adapters for its ports and [`config`] loads runtime settings.

pub mod config;
pub mod domain;
pub mod outbound;
