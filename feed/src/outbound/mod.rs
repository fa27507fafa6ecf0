//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between transport payloads and domain
//! records. They contain no feed logic.

pub mod http;
