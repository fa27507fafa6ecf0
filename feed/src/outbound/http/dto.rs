//! DTOs for decoding user source JSON responses.
//!
//! Payloads are decoded into these transport DTOs first, then mapped into the
//! domain's remote records.

use serde::Deserialize;

use crate::domain::{RemotePost, RemoteUser};

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: i64,
    pub(super) name: String,
    #[serde(default)]
    pub(super) username: Option<String>,
    #[serde(default)]
    pub(super) email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PostDto {
    pub(super) id: i64,
    pub(super) user_id: i64,
    pub(super) title: String,
    #[serde(default)]
    pub(super) body: String,
}

impl From<UserDto> for RemoteUser {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            username: dto.username,
            email: dto.email,
        }
    }
}

impl From<PostDto> for RemotePost {
    fn from(dto: PostDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            title: dto.title,
            body: dto.body,
        }
    }
}
