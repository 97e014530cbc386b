//! Post operations.
//!
//! Every operation checks the session store before touching the network and
//! fails with its own "must be logged in" message; the gateway's generic
//! guard never fires first. Include flags (`_author`, `_comments`,
//! `_reactions`) follow what each page needs.

use reqwest::Method;

use skald_core::error::Result;
use skald_core::model::{CreatePost, Post, UpdatePost};

use crate::client::ApiClient;

impl ApiClient {
    /// Fetches the feed via `GET /social/posts?_author=true`.
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let token = self.require_token("You must be logged in to view posts.")?;
        let mut url = self.endpoint(&["social", "posts"])?;
        url.query_pairs_mut().append_pair("_author", "true");
        self.request_data(
            Method::GET,
            url,
            Some(&token),
            None::<&()>,
            "Could not fetch posts from API.",
        )
        .await
    }

    /// Fetches a single post with author, comments and reactions via
    /// `GET /social/posts/{id}`. A wrong id surfaces as the API's 404.
    pub async fn get_post(&self, id: i64) -> Result<Post> {
        let token = self.require_token("You must be logged in to view this post.")?;
        let id = id.to_string();
        let mut url = self.endpoint(&["social", "posts", id.as_str()])?;
        url.query_pairs_mut()
            .append_pair("_author", "true")
            .append_pair("_comments", "true")
            .append_pair("_reactions", "true");
        self.request_data(
            Method::GET,
            url,
            Some(&token),
            None::<&()>,
            "Could not load this post.",
        )
        .await
    }

    /// Searches posts by title or body via `GET /social/posts/search?q=...`.
    pub async fn search_posts(&self, query: &str) -> Result<Vec<Post>> {
        let token = self.require_token("You must be logged in to search posts.")?;
        let mut url = self.endpoint(&["social", "posts", "search"])?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("_author", "true");
        self.request_data(
            Method::GET,
            url,
            Some(&token),
            None::<&()>,
            "Could not search posts.",
        )
        .await
    }

    /// Creates a post via `POST /social/posts` and returns it with its
    /// server-assigned id.
    pub async fn create_post(&self, payload: &CreatePost) -> Result<Post> {
        let token = self.require_token("You must be logged in to create a post.")?;
        let url = self.endpoint(&["social", "posts"])?;
        self.request_data(
            Method::POST,
            url,
            Some(&token),
            Some(payload),
            "Could not create post.",
        )
        .await
    }

    /// Replaces a post via `PUT /social/posts/{id}`.
    pub async fn update_post(&self, id: i64, payload: &UpdatePost) -> Result<Post> {
        let token = self.require_token("You must be logged in to edit a post.")?;
        let id = id.to_string();
        let url = self.endpoint(&["social", "posts", id.as_str()])?;
        self.request_data(
            Method::PUT,
            url,
            Some(&token),
            Some(payload),
            "Could not update post.",
        )
        .await
    }

    /// Deletes a post via `DELETE /social/posts/{id}`. Success is a 204 with
    /// no body.
    pub async fn delete_post(&self, id: i64) -> Result<()> {
        let token = self.require_token("You must be logged in to delete a post.")?;
        let id = id.to_string();
        let url = self.endpoint(&["social", "posts", id.as_str()])?;
        self.request_no_content(
            Method::DELETE,
            url,
            Some(&token),
            None::<&()>,
            "Could not delete post.",
        )
        .await
    }
}
