//! Small post preview card, used on the feed and profile pages.

use askama::Template;

use skald_core::model::Post;

use crate::format::{post_href, preview};
use crate::media_view::MediaView;

const PREVIEW_CHARS: usize = 120;

/// View-model for one post card. Built by a pure mapping from [`Post`];
/// all user-supplied text is escaped by the template when interpolated.
#[derive(Debug, Template)]
#[template(path = "post_card.html")]
pub struct PostCard {
    title: String,
    author: String,
    link: String,
    media: Option<MediaView>,
    preview: Option<String>,
}

impl PostCard {
    pub fn from_post(post: &Post) -> Self {
        let title = if post.title.trim().is_empty() {
            "Untitled post".to_string()
        } else {
            post.title.clone()
        };
        let author = post
            .author
            .as_ref()
            .map(|author| author.name.clone())
            .unwrap_or_else(|| "Unknown author".to_string());
        let media = post
            .media
            .as_ref()
            .map(|media| MediaView::from_media(media, &title));
        let body_preview = post
            .body
            .as_deref()
            .filter(|body| !body.is_empty())
            .map(|body| preview(body, PREVIEW_CHARS));
        Self {
            title,
            author,
            link: post_href(post.id),
            media,
            preview: body_preview,
        }
    }
}

/// Renders one post as a feed card fragment.
pub fn render_post_card(post: &Post) -> askama::Result<String> {
    PostCard::from_post(post).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(json: serde_json::Value) -> Post {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn renders_title_author_and_link() {
        let html = render_post_card(&post(serde_json::json!({
            "id": 7,
            "title": "Hello",
            "author": { "name": "alice" }
        })))
        .unwrap();

        assert!(html.contains(r#"<a href="/post/?id=7">Hello</a>"#));
        assert!(html.contains("by alice"));
        assert!(!html.contains("post-image"));
    }

    #[test]
    fn falls_back_for_missing_title_and_author() {
        let html = render_post_card(&post(serde_json::json!({ "id": 1, "title": "" }))).unwrap();
        assert!(html.contains("Untitled post"));
        assert!(html.contains("by Unknown author"));
    }

    #[test]
    fn escapes_user_supplied_text() {
        let html = render_post_card(&post(serde_json::json!({
            "id": 1,
            "title": "<script>alert(1)</script>",
            "body": "a & b"
        })))
        .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn truncates_long_bodies() {
        let html = render_post_card(&post(serde_json::json!({
            "id": 1,
            "title": "Long",
            "body": "y".repeat(200)
        })))
        .unwrap();

        assert!(html.contains(&format!("{}...", "y".repeat(120))));
        assert!(!html.contains(&"y".repeat(121)));
    }

    #[test]
    fn shows_media_with_alt_fallback_to_title() {
        let html = render_post_card(&post(serde_json::json!({
            "id": 1,
            "title": "Sunset",
            "media": { "url": "https://img.example/s.jpg" }
        })))
        .unwrap();

        assert!(html.contains(r#"src="https://img.example/s.jpg""#));
        assert!(html.contains(r#"alt="Sunset""#));
    }
}
