//! Full post layout for the single-post page.

use askama::Template;

use skald_core::model::Post;

use crate::format::{format_date, profile_href};
use crate::media_view::MediaView;

/// Author shown as a profile link.
#[derive(Debug)]
pub(crate) struct AuthorLink {
    pub(crate) name: String,
    pub(crate) href: String,
}

#[derive(Debug)]
pub(crate) struct ReactionView {
    pub(crate) symbol: String,
    pub(crate) count: u32,
}

#[derive(Debug)]
pub(crate) struct CommentView {
    pub(crate) owner: String,
    pub(crate) body: String,
}

/// View-model for the full post page: title, optional media and author link,
/// body (with a placeholder for empty posts), reactions and comments with
/// their empty-state texts handled by the template.
#[derive(Debug, Template)]
#[template(path = "full_post.html")]
pub struct FullPost {
    title: String,
    author: Option<AuthorLink>,
    media: Option<MediaView>,
    body: Option<String>,
    created: Option<String>,
    reactions: Vec<ReactionView>,
    comments: Vec<CommentView>,
}

impl FullPost {
    pub fn from_post(post: &Post) -> Self {
        let title = if post.title.trim().is_empty() {
            "Untitled post".to_string()
        } else {
            post.title.clone()
        };
        let author = post.author.as_ref().map(|author| AuthorLink {
            name: author.name.clone(),
            href: profile_href(&author.name),
        });
        let media = post
            .media
            .as_ref()
            .map(|media| MediaView::from_media(media, &title));
        let body = post
            .body
            .as_deref()
            .filter(|body| !body.is_empty())
            .map(str::to_string);
        Self {
            title,
            author,
            media,
            body,
            created: format_date(post.created.as_ref()),
            reactions: post
                .reactions
                .iter()
                .map(|reaction| ReactionView {
                    symbol: reaction.symbol.clone(),
                    count: reaction.count,
                })
                .collect(),
            comments: post
                .comments
                .iter()
                .map(|comment| CommentView {
                    owner: comment.owner.clone(),
                    body: comment.body.clone(),
                })
                .collect(),
        }
    }
}

/// Renders the full single-post fragment.
pub fn render_full_post(post: &Post) -> askama::Result<String> {
    FullPost::from_post(post).render()
}
