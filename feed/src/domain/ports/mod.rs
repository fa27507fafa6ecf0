//! Domain ports for the collaborators the feed depends on.

mod macros;
pub(crate) use macros::define_port_error;

mod network_client;
mod user_source;

#[cfg(test)]
pub use network_client::MockNetworkClient;
pub use network_client::{
    FixtureNetworkClient, NetworkClient, NetworkClientError, NetworkRequest, NetworkResponse,
    RequestMethod,
};
#[cfg(test)]
pub use user_source::MockUserSource;
pub use user_source::{FixtureUserSource, UserSource, UserSourceError};
