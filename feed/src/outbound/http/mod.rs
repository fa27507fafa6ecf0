//! Reqwest-backed adapters for the user source and network client ports.
//!
//! Both adapters resolve paths against one base URL and share a single
//! request timeout.

mod dto;
mod network_client;
mod support;
mod user_source;

pub use network_client::HttpNetworkClient;
pub use support::HttpAdapterError;
pub use user_source::HttpUserSource;
