//! Post entities and post payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A url + alt-text pair used for post media, avatars and banners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Media {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

/// A social post as returned by the API.
///
/// `id` is server-assigned and immutable; everything beyond `title` is
/// optional. Embedded author/comments/reactions only appear when the
/// operation asked for them via include flags.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub media: Option<Media>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    #[serde(default, rename = "_count")]
    pub count: PostCount,
}

/// Author block embedded in a post when `_author=true` was requested.
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<Media>,
}

/// A comment on a post.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub body: String,
    pub owner: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Aggregated reaction: one symbol and how many users reacted with it.
#[derive(Debug, Clone, Deserialize)]
pub struct Reaction {
    pub symbol: String,
    pub count: u32,
}

/// Comment/reaction summary attached under `_count`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PostCount {
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub reactions: u32,
}

/// Payload for creating a post. Only `title` is required.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePost {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl CreatePost {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            media: None,
            tags: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// Payload for replacing an existing post. Same shape as [`CreatePost`]; the
/// API treats the update as a full replacement, so the title is required
/// again.
pub type UpdatePost = CreatePost;
