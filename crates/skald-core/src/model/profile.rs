//! Profile entities and profile payloads.
//!
//! The handle (`name`) is the lookup key everywhere; the API exposes no
//! numeric profile id to this client.

use serde::{Deserialize, Serialize};

use super::post::{Media, Post};

/// A user profile, optionally carrying embedded posts and follower/following
/// lists when the include flags asked for them.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<Media>,
    #[serde(default)]
    pub banner: Option<Media>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub followers: Vec<ProfileHit>,
    #[serde(default)]
    pub following: Vec<ProfileHit>,
    #[serde(default, rename = "_count")]
    pub count: ProfileCount,
}

/// The compact profile shape used in search results and follower/following
/// lists.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileHit {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<Media>,
    #[serde(default)]
    pub banner: Option<Media>,
}

/// Post/follower/following summary attached under `_count`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ProfileCount {
    #[serde(default)]
    pub posts: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
}

/// Payload for editing the signed-in user's own profile. Every field is
/// optional; absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Media>,
}

impl UpdateProfile {
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_avatar(mut self, avatar: Media) -> Self {
        self.avatar = Some(avatar);
        self
    }

    pub fn with_banner(mut self, banner: Media) -> Self {
        self.banner = Some(banner);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_profile_with_embedded_lists() {
        let body = r#"{
            "name": "alice",
            "email": "a@stud.noroff.no",
            "bio": "hello",
            "avatar": { "url": "https://img.example/a.png", "alt": "alice" },
            "posts": [{ "id": 1, "title": "First" }],
            "followers": [{ "name": "bob" }],
            "following": [],
            "_count": { "posts": 1, "followers": 1, "following": 0 }
        }"#;
        let profile: Profile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.name, "alice");
        assert_eq!(profile.posts[0].id, 1);
        assert_eq!(profile.followers[0].name, "bob");
        assert_eq!(profile.count.followers, 1);
    }

    #[test]
    fn parses_bare_profile() {
        let profile: Profile = serde_json::from_str(r#"{"name": "bob"}"#).unwrap();
        assert!(profile.posts.is_empty());
        assert_eq!(profile.count.posts, 0);
    }

    #[test]
    fn update_payload_skips_absent_fields() {
        let payload = UpdateProfile::default().with_bio("new bio");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "bio": "new bio" }));
    }
}
