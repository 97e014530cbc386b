//! Compact profile card for search results and follower/following lists.

use askama::Template;

use skald_core::model::ProfileHit;

use crate::format::profile_href;
use crate::media_view::MediaView;

/// View-model for one compact profile card.
#[derive(Debug, Template)]
#[template(path = "profile_result.html")]
pub struct ProfileResult {
    name: String,
    link: String,
    bio: Option<String>,
    avatar: Option<MediaView>,
}

impl ProfileResult {
    pub fn from_hit(hit: &ProfileHit) -> Self {
        let name = if hit.name.trim().is_empty() {
            "Unknown user".to_string()
        } else {
            hit.name.trim().to_string()
        };
        let bio = hit
            .bio
            .as_deref()
            .map(str::trim)
            .filter(|bio| !bio.is_empty())
            .map(str::to_string);
        let avatar = hit
            .avatar
            .as_ref()
            .map(|media| MediaView::from_media(media, &name));
        Self {
            link: profile_href(&name),
            name,
            bio,
            avatar,
        }
    }
}

/// Renders one compact profile card fragment.
pub fn render_profile_result(hit: &ProfileHit) -> askama::Result<String> {
    ProfileResult::from_hit(hit).render()
}
