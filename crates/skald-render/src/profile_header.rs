//! Profile page header: avatar, handle, bio and counts.

use askama::Template;

use skald_core::model::Profile;

use crate::media_view::MediaView;

/// View-model for the top of the profile page.
#[derive(Debug, Template)]
#[template(path = "profile_header.html")]
pub struct ProfileHeader {
    name: String,
    bio: Option<String>,
    avatar: Option<MediaView>,
    posts: u32,
    followers: u32,
    following: u32,
}

impl ProfileHeader {
    pub fn from_profile(profile: &Profile) -> Self {
        let avatar = profile
            .avatar
            .as_ref()
            .map(|media| MediaView::from_media(media, &profile.name));
        let bio = profile
            .bio
            .as_deref()
            .map(str::trim)
            .filter(|bio| !bio.is_empty())
            .map(str::to_string);
        Self {
            name: profile.name.clone(),
            bio,
            avatar,
            posts: profile.count.posts,
            followers: profile.count.followers,
            following: profile.count.following,
        }
    }
}

/// Renders the profile header fragment.
pub fn render_profile_header(profile: &Profile) -> askama::Result<String> {
    ProfileHeader::from_profile(profile).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(json: serde_json::Value) -> Profile {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn renders_counts_and_bio() {
        let html = render_profile_header(&profile(serde_json::json!({
            "name": "alice",
            "bio": "hello there",
            "_count": { "posts": 3, "followers": 2, "following": 1 }
        })))
        .unwrap();

        assert!(html.contains("<h1>alice</h1>"));
        assert!(html.contains("hello there"));
        assert!(html.contains("Posts: 3"));
        assert!(html.contains("Followers: 2"));
        assert!(html.contains("Following: 1"));
    }

    #[test]
    fn missing_avatar_renders_placeholder() {
        let html = render_profile_header(&profile(serde_json::json!({ "name": "bob" }))).unwrap();
        assert!(html.contains("aria-hidden=\"true\""));
        assert!(!html.contains("<img"));
        assert!(html.contains("Posts: 0"));
    }

    #[test]
    fn escapes_bio_markup() {
        let html = render_profile_header(&profile(serde_json::json!({
            "name": "mallory",
            "bio": "<b>bold</b>"
        })))
        .unwrap();

        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }
}
