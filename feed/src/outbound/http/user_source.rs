//! Reqwest-backed user source adapter.
//!
//! Reads `GET {base}/users/{id}` and `GET {base}/users/{id}/posts?limit=N`.
//! A 404 on either resource means the user is unknown.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{PostDto, UserDto};
use super::support::{Endpoint, HttpAdapterError, status_message};
use crate::domain::ports::{UserSource, UserSourceError};
use crate::domain::{RemotePost, RemoteUser};

/// User source adapter performing JSON `GET` requests against one base URL.
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    endpoint: Endpoint,
}

impl HttpUserSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
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

    fn user_url(&self, id: i64) -> Url {
        self.endpoint.join_segments(&["users", &id.to_string()])
    }

    fn posts_url(&self, id: i64, page_size: usize) -> Url {
        let mut url = self
            .endpoint
            .join_segments(&["users", &id.to_string(), "posts"]);
        url.query_pairs_mut()
            .append_pair("limit", &page_size.to_string());
        url
    }

    /// `Ok(None)` on 404, decoded body on success.
    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, UserSourceError> {
        debug!(url = %url, "requesting user source");
        let response = self
            .endpoint
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if status == StatusCode::NOT_FOUND {
            debug!(url = %url, "user source resource not found");
            return Ok(None);
        }
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "user source answered with failure status");
            return Err(UserSourceError::status(
                status.as_u16(),
                status_message(status, body.as_ref()),
            ));
        }
        decode(body.as_ref()).map(Some)
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn get_user(&self, id: i64) -> Result<Option<RemoteUser>, UserSourceError> {
        let user: Option<UserDto> = self.fetch(self.user_url(id)).await?;
        Ok(user.map(RemoteUser::from))
    }

    async fn get_posts(
        &self,
        id: i64,
        page_size: usize,
    ) -> Result<Vec<RemotePost>, UserSourceError> {
        let posts: Option<Vec<PostDto>> = self.fetch(self.posts_url(id, page_size)).await?;
        Ok(posts
            .unwrap_or_default()
            .into_iter()
            .take(page_size)
            .map(RemotePost::from)
            .collect())
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, UserSourceError> {
    serde_json::from_slice(body).map_err(|error| {
        UserSourceError::decode(format!("invalid user source JSON payload: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> UserSourceError {
    UserSourceError::connection(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::super::support::test_server::serve_once;
    use super::*;

    fn source(base: &str) -> HttpUserSource {
        let base = Url::parse(base).expect("valid url");
        HttpUserSource::new(base, Duration::from_secs(5)).expect("adapter builds")
    }

    #[test]
    fn builds_resource_urls() {
        let source = source("http://api.test/v1");

        assert_eq!(source.user_url(4).as_str(), "http://api.test/v1/users/4");
        assert_eq!(
            source.posts_url(4, 20).as_str(),
            "http://api.test/v1/users/4/posts?limit=20"
        );
    }

    #[test]
    fn decode_failures_map_to_decode_errors() {
        let err = decode::<UserDto>(b"{\"id\": \"not a number\"}").expect_err("decode fails");
        assert!(matches!(err, UserSourceError::Decode { .. }));
    }

    #[tokio::test]
    async fn get_user_decodes_success_payload() {
        let (base, request) = serve_once(
            "200 OK",
            r#"{"id": 1, "name": "Leanne Graham", "username": "Bret"}"#,
        )
        .await;

        let user = source(&base).get_user(1).await.expect("fetch succeeds");

        let user = user.expect("user present");
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.username.as_deref(), Some("Bret"));
        let head = request.await.expect("server task");
        assert!(head.starts_with("GET /users/1 HTTP/1.1"));
    }

    #[tokio::test]
    async fn get_user_maps_not_found_to_none() {
        let (base, _request) = serve_once("404 Not Found", "").await;

        let user = source(&base).get_user(99).await.expect("fetch succeeds");
        assert_eq!(user, None);
    }

    #[tokio::test]
    async fn get_user_maps_failure_status_to_status_error() {
        let (base, _request) = serve_once("503 Service Unavailable", "maintenance").await;

        let err = source(&base).get_user(1).await.expect_err("fetch fails");
        assert_eq!(err, UserSourceError::status(503_u16, "status 503: maintenance"));
    }

    #[tokio::test]
    async fn get_posts_caps_results_at_page_size() {
        let (base, request) = serve_once(
            "200 OK",
            r#"[
                {"id": 1, "userId": 2, "title": "a", "body": ""},
                {"id": 2, "userId": 2, "title": "b", "body": ""},
                {"id": 3, "userId": 2, "title": "c", "body": ""}
            ]"#,
        )
        .await;

        let posts = source(&base).get_posts(2, 2).await.expect("fetch succeeds");

        let ids: Vec<i64> = posts.iter().map(|post| post.id).collect();
        assert_eq!(ids, [1, 2]);
        let head = request.await.expect("server task");
        assert!(head.starts_with("GET /users/2/posts?limit=2 HTTP/1.1"));
    }

    #[tokio::test]
    async fn unreachable_source_maps_to_connection_error() {
        let err = source("http://127.0.0.1:9")
            .get_user(1)
            .await
            .expect_err("connection fails");
        assert!(matches!(err, UserSourceError::Connection { .. }));
    }
}
