//! Driven port for raw network requests.
//!
//! Only the service's `ping` helper uses this port; it forwards the response
//! code without interpreting it.

use async_trait::async_trait;

use super::define_port_error;

/// HTTP method of a [`NetworkRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
}

impl RequestMethod {
    /// Upper-case method name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Request passed to a [`NetworkClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRequest {
    /// Path relative to the client's base address, starting with `/`.
    pub path: String,
    /// Method to use.
    pub method: RequestMethod,
    /// Optional request body.
    pub body: Option<String>,
}

impl NetworkRequest {
    /// Bodiless `GET` for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: RequestMethod::Get,
            body: None,
        }
    }
}

/// Response returned by a [`NetworkClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkResponse {
    /// Status code as received.
    pub code: u16,
    /// Response body, possibly empty.
    pub body: String,
}

define_port_error! {
    /// Errors raised by network client adapters.
    pub enum NetworkClientError {
        /// The request never produced a response.
        Connection { message: String } => "network request failed: {message}",
        /// The adapter refused to send the request.
        InvalidRequest { message: String } => "network request invalid: {message}",
    }
}

/// Port for executing raw requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NetworkClient: Send + Sync {
    /// Execute one request.
    async fn execute(&self, request: &NetworkRequest)
    -> Result<NetworkResponse, NetworkClientError>;
}

/// In-memory client answering every request with one status code.
#[derive(Debug, Clone, Copy)]
pub struct FixtureNetworkClient {
    code: u16,
}

impl FixtureNetworkClient {
    /// Client answering with `code`.
    pub fn with_code(code: u16) -> Self {
        Self { code }
    }
}

impl Default for FixtureNetworkClient {
    fn default() -> Self {
        Self::with_code(200)
    }
}

#[async_trait]
impl NetworkClient for FixtureNetworkClient {
    async fn execute(
        &self,
        request: &NetworkRequest,
    ) -> Result<NetworkResponse, NetworkClientError> {
        if !request.path.starts_with('/') {
            return Err(NetworkClientError::invalid_request(format!(
                "path must start with '/': {}",
                request.path
            )));
        }
        Ok(NetworkResponse {
            code: self.code,
            body: String::new(),
        })
    }
}
