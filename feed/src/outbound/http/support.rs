//! Helpers shared by the HTTP adapters.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

const PREVIEW_CHAR_LIMIT: usize = 160;

/// Errors raised while constructing an HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpAdapterError {
    /// The base URL cannot have paths appended to it.
    #[error("base url cannot carry paths: {url}")]
    UnsupportedBaseUrl {
        /// Offending URL.
        url: String,
    },
    /// The reqwest client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Validated base address plus a client with an explicit timeout.
#[derive(Debug, Clone)]
pub(super) struct Endpoint {
    pub(super) client: Client,
    base: Url,
}

impl Endpoint {
    pub(super) fn new(base: Url, timeout: Duration) -> Result<Self, HttpAdapterError> {
        if base.cannot_be_a_base() {
            return Err(HttpAdapterError::UnsupportedBaseUrl {
                url: base.to_string(),
            });
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    pub(super) fn base(&self) -> &Url {
        &self.base
    }

    /// Base URL with `segments` appended as path segments.
    pub(super) fn join_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Compact, length-capped rendering of a response body for error messages.
pub(super) fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

/// `status <code>` with the body preview appended when there is one.
pub(super) fn status_message(status: StatusCode, body: &[u8]) -> String {
    let preview = body_preview(body);
    if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    }
}
