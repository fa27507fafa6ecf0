//! Reqwest-backed network client adapter.
//!
//! Sends `{method} {base}{path}` and reports whatever status comes back;
//! failure statuses are responses, not errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, Url};
use tracing::{debug, warn};

use super::support::{Endpoint, HttpAdapterError};
use crate::domain::ports::{
    NetworkClient, NetworkClientError, NetworkRequest, NetworkResponse, RequestMethod,
};

/// Network client resolving request paths against one base URL.
#[derive(Debug, Clone)]
pub struct HttpNetworkClient {
    endpoint: Endpoint,
}

impl HttpNetworkClient {
    /// Build a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when `base` cannot carry paths or the client cannot be
    /// constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, HttpAdapterError> {
        Ok(Self {
            endpoint: Endpoint::new(base, timeout)?,
        })
    }

    fn resolve(&self, path: &str) -> Result<Url, NetworkClientError> {
        if !path.starts_with('/') {
            return Err(NetworkClientError::invalid_request(format!(
                "path must start with '/': {path}"
            )));
        }
        let base = self.endpoint.base().as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{path}")).map_err(|error| {
            NetworkClientError::invalid_request(format!("invalid request path {path}: {error}"))
        })
    }
}

fn to_method(method: RequestMethod) -> Method {
    match method {
        RequestMethod::Get => Method::GET,
        RequestMethod::Post => Method::POST,
    }
}

#[async_trait]
impl NetworkClient for HttpNetworkClient {
    async fn execute(
        &self,
        request: &NetworkRequest,
    ) -> Result<NetworkResponse, NetworkClientError> {
        let url = self.resolve(&request.path)?;
        debug!(method = request.method.as_str(), url = %url, "sending network request");

        let mut builder = self
            .endpoint
            .client
            .request(to_method(request.method), url.clone());
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        let response = builder
            .send()
            .await
            .map_err(|error| NetworkClientError::connection(error.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| NetworkClientError::connection(error.to_string()))?;
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "network request answered with failure status");
        }
        Ok(NetworkResponse {
            code: status.as_u16(),
            body,
        })
    }
}
